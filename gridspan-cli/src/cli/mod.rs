//! Command-line interface orchestration for the gridspan planner.
//!
//! The CLI offers a `run` command that loads a Matrix Market grid dataset,
//! plans the minimum-cost set of connections with Prim's algorithm, certifies
//! the result with an independent union-find check, and renders a report.

mod commands;

pub use commands::{
    Cli, CliError, Command, CostSource, ExecutionSummary, RunCommand, render_summary, run_cli,
};
