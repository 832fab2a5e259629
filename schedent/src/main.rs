// schedent/src/main.rs
//! Schedent entry point.
//!
//! Parses flags, sets up logging and runs the entropy pipeline over stdin.

use anyhow::Result;
use std::io::{self, BufWriter};

use schedent::cli::Cli;
use schedent::{logger, run_entropy_opts};

fn main() -> Result<()> {
    let args = Cli::parse_or_exit();
    logger::init_logger(args.log_level());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    run_entropy_opts(&args.entropy_options(), stdin.lock(), &mut writer)
}
