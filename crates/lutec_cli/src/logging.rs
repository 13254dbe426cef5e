//! Logging setup for the command line

use clap::{value_parser, ArgAction};
use std::io::stderr;
use tracing::metadata::LevelFilter;
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::format;
use tracing_subscriber::prelude::*;
use tracing_subscriber::Registry;

/// Common way to set logging levels
#[derive(Debug, Clone, Copy, clap::Args)]
pub struct LoggingArgs {
    #[clap(short = 'v', value_parser = value_parser!(u8).range(0..=2), action=ArgAction::Count, conflicts_with="quiet")]
    verbose: u8,
    #[clap(short = 'q', value_parser = value_parser!(u8).range(0..=2), action=ArgAction::Count, conflicts_with="verbose")]
    quiet: u8,
}

impl LoggingArgs {
    /// Gets the logging level based on whether `-v[v]` or `-q[q]` has been used
    pub fn log_level_filter(&self) -> LevelFilter {
        let sum = self.verbose as i8 - self.quiet as i8;
        match sum {
            i8::MIN..=-2 => LevelFilter::OFF,
            -1 => LevelFilter::ERROR,
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Installs the global subscriber. Everything is written to stderr, stdout carries generated code.
pub fn init_logging(level_filter: LevelFilter) -> eyre::Result<()> {
    let registry = Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format().without_time())
                .with_writer(stderr)
                .with_filter(level_filter),
        )
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(registry)?;

    Ok(())
}
