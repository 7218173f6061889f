//! Command-line interface orchestration for randigraph.
//!
//! Each command builds or loads one directed graph and summarises its
//! in-degree statistics; graphs themselves are never written out.

mod commands;

pub use commands::{
    Algorithm, Cli, CliError, Command, DpaArgs, ErArgs, ExecutionSummary, Fixture, StatsArgs,
    render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
