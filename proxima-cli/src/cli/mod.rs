//! Command-line interface orchestration for the proxima analyses.
//!
//! The single `analyze` command reads an `x,y,z` point list and reports both
//! the bounded clustering product and the closing edge.

mod commands;

pub use commands::{
    AnalyzeCommand, AxisArg, Cli, CliError, Command, ExecutionSummary, StrategyArg,
    render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
