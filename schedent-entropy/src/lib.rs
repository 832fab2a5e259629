// schedent-entropy/src/lib.rs
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod entropy;
pub mod engine;

pub use engine::{entropy_trace, EntropyState};
pub use entropy::{grouped_shannon_entropy, weighted_log_term};

/// Common type definitions
pub type EntropyScore = f64;

/// A task label. Task identifiers collapse to their first character.
pub type Label = char;
