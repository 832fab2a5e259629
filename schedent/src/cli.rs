// schedent/src/cli.rs
//! Command-line interface for schedent.
//!
//! Every flag is optional. Invoked bare, the program reads stdin and prints
//! the report with one worker per CPU line.

use clap::Parser;
use log::LevelFilter;

use crate::commands::entropy::EntropyOptions;

#[derive(Parser, Debug)]
#[command(
    name = "schedent",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Per-CPU incremental Shannon entropy of task scheduling streams",
    long_about = "Reads one line per CPU from stdin, each holding `task duration` pairs, until a blank line or end of input. Prints the task list and the running entropy (in bits) after every task, one block per CPU, in input order."
)]
pub struct Cli {
    /// Maximum number of CPU lines processed at the same time.
    #[arg(long, short = 'j', value_name = "N", help = "Cap concurrently processed CPU lines (default: one worker per line).")]
    pub jobs: Option<usize>,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// Disable all logging
    #[arg(long, short = 'q', help = "Suppress all log messages.")]
    pub quiet: bool,
}

impl Cli {
    /// Parses `std::env::args`, exiting on failure.
    ///
    /// Usage errors exit with status 1 instead of clap's default 2, so the
    /// process only ever exits 0 or 1.
    pub fn parse_or_exit() -> Self {
        Self::try_parse().unwrap_or_else(|err| {
            let _ = err.print();
            std::process::exit(parse_exit_code(&err));
        })
    }

    /// The level forced by flags, if any. `None` defers to `RUST_LOG`.
    pub fn log_level(&self) -> Option<LevelFilter> {
        if self.quiet {
            Some(LevelFilter::Off)
        } else if self.debug {
            Some(LevelFilter::Debug)
        } else {
            None
        }
    }

    pub fn entropy_options(&self) -> EntropyOptions {
        EntropyOptions { jobs: self.jobs }
    }
}

/// Exit status for a parse outcome: 0 for `--help`/`--version`, 1 for errors.
pub fn parse_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() { 1 } else { 0 }
}
