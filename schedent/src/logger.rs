// schedent/src/logger.rs
//! Logger bootstrap for the CLI.
//!
//! Logs always go to stderr; stdout carries only the entropy report.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Default filter when neither `RUST_LOG` nor a CLI flag chooses one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Initializes `env_logger`.
///
/// `RUST_LOG` is honoured unless `level` overrides it. Calling this more than
/// once is harmless; only the first call installs a logger.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init();
}
