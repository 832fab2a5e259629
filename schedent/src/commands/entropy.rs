// schedent/src/commands/entropy.rs
//! The entropy run: read, dispatch, report.

use anyhow::{Context, Result};
use log::info;
use std::io::{BufRead, Write};

use schedent_core::{read_records, write_report, Dispatcher};

/// Options for a single run.
#[derive(Debug, Clone, Default)]
pub struct EntropyOptions {
    /// Cap on concurrently processed CPU lines. `None` means one worker per line.
    pub jobs: Option<usize>,
}

/// Reads every CPU line from `input`, computes all traces in parallel and
/// writes the report to `output`.
///
/// Nothing is written unless every worker completed.
pub fn run_entropy_opts<R: BufRead, W: Write>(
    opts: &EntropyOptions,
    input: R,
    output: &mut W,
) -> Result<()> {
    info!("Starting schedent run.");

    let dispatcher = Dispatcher::with_limit(opts.jobs).context("Invalid worker limit")?;
    let records = read_records(input).context("Failed to read scheduling input")?;

    let runtime = dispatcher
        .build_runtime()
        .context("Failed to start entropy workers")?;
    let reports = runtime
        .block_on(dispatcher.dispatch(records))
        .context("Entropy computation failed")?;

    write_report(&reports, output).context("Failed to write report")?;

    info!("Schedent run completed for {} CPU(s).", reports.len());
    Ok(())
}
