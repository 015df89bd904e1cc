//! Small helpers shared across CLI tests.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::commands::run_command;
use super::{AnalyzeCommand, AxisArg, CliError, StrategyArg};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_text_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

/// An `analyze` command over `path` with every option at its default.
pub(super) fn analyze(path: PathBuf) -> AnalyzeCommand {
    AnalyzeCommand {
        path,
        edge_budget: 1_000,
        largest: 3,
        axis: AxisArg::X,
        strategy: StrategyArg::Auto,
        skip_malformed: false,
        name: None,
    }
}

pub(super) fn run_command_expecting_error(cmd: AnalyzeCommand, panic_msg: &str) -> CliError {
    match run_command(cmd) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
