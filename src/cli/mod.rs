//! Command-line interface
//!
//! Thin plumbing over the generator: parses a provider-selection list and an
//! output-root path, hands them to the orchestrator, and reports the
//! per-provider summary.

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run_cli, Cli, Commands};
