// schedent/src/commands/mod.rs
pub mod entropy;
