// schedent/src/lib.rs
//! # Schedent CLI Application
//!
//! Reads per-CPU task scheduling lines from stdin, computes each CPU's
//! running entropy in parallel and prints the results in input order.

pub mod cli;
pub mod commands;
pub mod logger;

pub use commands::entropy::{run_entropy_opts, EntropyOptions};
