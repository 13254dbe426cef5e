use crate::args::Args;
use crate::logging::init_logging;
use clap::Parser;
use eyre::WrapErr;
use lute_tokens::positioned::PositionedToken;
use lutec::{Lutec, LutecError, LutecResult};
use owo_colors::{OwoColorize, Stream};
use std::io::{stdin, Read};
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info, trace};

mod args;
mod logging;

fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.logging().log_level_filter())?;
    trace!("starting lutec with args: {args:?}");
    debug!("lutec version: {}", env!("CARGO_PKG_VERSION"));

    let lutec = Lutec::builder()
        .header(&args.header)
        .indent_width(args.indent)
        .build()?;

    let source = read_source(args.source())?;
    let compiled = if args.tokens {
        compile_with_trace(&lutec, &source)
    } else {
        lutec.compile(source.as_slice())
    };

    match compiled {
        Ok(generated) => {
            write_output(args.output.as_deref(), &generated)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(LutecError::Syntax(error)) => {
            debug!("{error:#}");
            println!(
                "{}",
                error.if_supports_color(Stream::Stdout, |error| error.red())
            );
            Ok(ExitCode::FAILURE)
        }
        Err(error) => Err(error.into()),
    }
}

fn read_source(path: Option<&Path>) -> eyre::Result<Vec<u8>> {
    let mut buffer = vec![];
    match path {
        Some(path) => {
            info!("compiling {path:?}");
            buffer = std::fs::read(path).wrap_err_with(|| format!("could not read {path:?}"))?;
        }
        None => {
            stdin()
                .read_to_end(&mut buffer)
                .wrap_err("could not read standard input")?;
        }
    }
    Ok(buffer)
}

/// Compiles the source, printing every token read first
fn compile_with_trace(lutec: &Lutec, source: &[u8]) -> LutecResult<String> {
    let tokens = lutec.tokenize(source)?;
    for (ordinal, token) in tokens.iter().enumerate() {
        println!("{}", token.trace_line(ordinal));
    }
    println!(
        "{}",
        PositionedToken::eof_after(tokens.last()).trace_line(tokens.len())
    );
    lutec.compile_tokens(&tokens)
}

fn write_output(path: Option<&Path>, generated: &str) -> eyre::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, format!("{generated}\n"))
                .wrap_err_with(|| format!("could not write {path:?}"))?;
            info!("wrote generated code to {path:?}");
        }
        None => println!("{generated}"),
    }
    Ok(())
}
