//! the args for running lutec

use crate::logging::LoggingArgs;
use lutec::{DEFAULT_HEADER, DEFAULT_INDENT_WIDTH};
use std::path::{Path, PathBuf};

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Compiles lute sources into C-like code")]
pub struct Args {
    #[command(flatten)]
    logging: LoggingArgs,

    /// The source file to compile. Standard input is read when absent or `-`
    #[clap(value_name = "source file", value_hint = clap::ValueHint::FilePath)]
    file: Option<PathBuf>,
    /// Write generated code to this file instead of standard output
    #[clap(short = 'o', long = "output", value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
    /// Print every token read before the generated code
    #[clap(long)]
    pub tokens: bool,
    /// The runtime header generated code includes
    #[clap(long, env = "LUTEC_HEADER", default_value = DEFAULT_HEADER)]
    pub header: String,
    /// Spaces per indentation level
    #[clap(long = "indent", default_value_t = DEFAULT_INDENT_WIDTH)]
    pub indent: usize,
}

impl Args {
    /// The source file, or `None` if standard input should be read
    pub fn source(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .filter(|file| *file != Path::new("-"))
    }

    pub fn logging(&self) -> &LoggingArgs {
        &self.logging
    }
}
