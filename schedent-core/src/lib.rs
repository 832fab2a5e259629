// schedent-core/src/lib.rs
//! # Schedent Core Library
//!
//! `schedent-core` turns lines of `task duration` pairs into per-CPU entropy
//! traces. It owns the data model, the line reader and record parser, the
//! parallel work dispatcher and the text reporter. The numeric recurrence
//! itself lives in `schedent-entropy`.
//!
//! ## Modules
//!
//! * `record`: `Task`, `Record` and `EntropyTrace`, plus `parse_record`.
//! * `reader`: Reads lines until the first blank line or end of input.
//! * `dispatcher`: Runs one unit of work per record on a tokio runtime.
//! * `report`: Formats `CpuReport`s exactly as the CLI prints them.
//! * `headless`: One-shot, single-threaded pipeline over a string.
//! * `errors`: The `SchedentError` enum.
//!
//! ## Usage Example
//!
//! ```rust
//! use schedent_core::headless_entropy_report;
//!
//! let output = headless_entropy_report("A 3 B 3\n").unwrap();
//! assert!(output.ends_with("0.00 1.00 \n"));
//! ```
//!
//! ## Error Handling
//!
//! Malformed input never fails: unparsable tails are dropped and degenerate
//! weights flow through the entropy formula. Only I/O failures and worker
//! failures surface as [`SchedentError`].
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod dispatcher;
pub mod errors;
pub mod headless;
pub mod reader;
pub mod record;
pub mod report;

pub use dispatcher::Dispatcher;
pub use errors::SchedentError;
pub use headless::{headless_entropy_report, headless_reports};
pub use reader::{read_lines, read_records};
pub use record::{parse_record, EntropyTrace, Record, Task};
pub use report::{format_entropy, write_report, CpuReport};
