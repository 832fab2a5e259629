//! errors.rs - Custom error types for the schedent-core library.
//!
//! Parsing and numeric edge cases never surface here; they are absorbed with
//! defined fallbacks. Only input failures and worker-pool failures do, and
//! every one of them is fatal to the whole run.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `schedent-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SchedentError {
    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to create the worker pool: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("Error running worker for CPU {cpu}: {source}")]
    Worker {
        cpu: usize,
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("Worker limit must be at least 1 (got {0})")]
    InvalidJobs(usize),
}
