// schedent-core/src/headless.rs

//! `headless.rs`
//! Convenience wrapper for running the whole pipeline over an in-memory string.
//! Records are computed sequentially on the calling thread; no runtime is needed.

use crate::errors::SchedentError;
use crate::reader::read_records;
use crate::report::{write_report, CpuReport};

/// Computes one report per record in `input`, numbered from 1.
pub fn headless_reports(input: &str) -> Result<Vec<CpuReport>, SchedentError> {
    Ok(read_records(input.as_bytes())?
        .into_iter()
        .enumerate()
        .map(|(index, record)| CpuReport::compute(index + 1, record))
        .collect())
}

/// Produces exactly the text the binary would print for `input`.
pub fn headless_entropy_report(input: &str) -> Result<String, SchedentError> {
    let reports = headless_reports(input)?;
    let mut buffer = Vec::new();
    write_report(&reports, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
