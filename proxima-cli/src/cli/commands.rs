//! Command implementations and argument parsing for the proxima CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use proxima_core::{
    Axis, AxisProduct, ConnectivityReport, DEFAULT_EDGE_BUDGET, DEFAULT_LARGEST_COMPONENTS,
    ExecutionStrategy, PointSource, ProximaBuilder, ProximaError,
};
use proxima_providers_text::{ParseMode, TextPointProvider, TextPointProviderError};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "proxima",
    about = "Cluster 3-D points by proximity and find the edge that joins them all."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Analyse a point list with both connectivity policies.
    Analyze(AnalyzeCommand),
}

/// Options accepted by the `analyze` command.
#[derive(Debug, Args, Clone)]
pub struct AnalyzeCommand {
    /// Path to a text file with one `x,y,z` integer triple per line.
    pub path: PathBuf,

    /// Number of shortest edges the bounded clustering consumes.
    #[arg(
        long = "edge-budget",
        default_value_t = DEFAULT_EDGE_BUDGET,
        value_parser = clap::value_parser!(usize),
    )]
    pub edge_budget: usize,

    /// How many of the largest components are multiplied.
    #[arg(
        long = "largest",
        default_value_t = DEFAULT_LARGEST_COMPONENTS,
        value_parser = clap::value_parser!(usize),
    )]
    pub largest: usize,

    /// Coordinate multiplied across the closing edge's endpoints.
    #[arg(long, value_enum, default_value_t = AxisArg::X)]
    pub axis: AxisArg,

    /// How edge ranking is executed.
    #[arg(long, value_enum, default_value_t = StrategyArg::Auto)]
    pub strategy: StrategyArg,

    /// Drop malformed lines instead of failing.
    #[arg(long = "skip-malformed")]
    pub skip_malformed: bool,

    /// Override name for the data source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Coordinate axis accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AxisArg {
    /// The first coordinate.
    X,
    /// The second coordinate.
    Y,
    /// The third coordinate.
    Z,
}

impl From<AxisArg> for Axis {
    fn from(value: AxisArg) -> Self {
        match value {
            AxisArg::X => Self::X,
            AxisArg::Y => Self::Y,
            AxisArg::Z => Self::Z,
        }
    }
}

/// Execution strategy accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Parallel ranking when available.
    Auto,
    /// Rank on the calling thread.
    Sequential,
    /// Require parallel ranking.
    Parallel,
}

impl From<StrategyArg> for ExecutionStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Auto => Self::Auto,
            StrategyArg::Sequential => Self::Sequential,
            StrategyArg::Parallel => Self::Parallel,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening the input.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The point list could not be read.
    #[error(transparent)]
    Text(#[from] TextPointProviderError),
    /// Configuration or analysis failed.
    #[error(transparent)]
    Core(#[from] ProximaError),
}

/// Summarises the outcome of an analysis.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name reported by the data source.
    pub data_source: String,
    /// Results of both connectivity policies.
    pub report: ConnectivityReport,
    /// Axis combined across the closing edge.
    pub axis: Axis,
}

impl ExecutionSummary {
    /// Product of the largest component sizes, or zero without components.
    #[must_use]
    pub fn product(&self) -> u64 {
        self.report.bounded().product().unwrap_or(0)
    }

    /// Closing-edge value on [`Self::axis`], or zero without a closing edge.
    #[must_use]
    pub fn closing_value(&self) -> i64 {
        self.report
            .closing_value(&AxisProduct(self.axis))
            .unwrap_or(0)
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or the analysis fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use proxima_cli::cli::{AnalyzeCommand, AxisArg, Cli, Command, StrategyArg, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "0,0,0\n1,0,0\n3,0,0\n")?;
/// let cli = Cli {
///     command: Command::Analyze(AnalyzeCommand {
///         path: file.path().to_path_buf(),
///         edge_budget: 1,
///         largest: 3,
///         axis: AxisArg::X,
///         strategy: StrategyArg::Auto,
///         skip_malformed: false,
///         name: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.product(), 2);
/// assert_eq!(summary.closing_value(), 3);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Analyze(analyze) => {
            Span::current().record("command", field::display("analyze"));
            run_command(analyze)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        path = field::Empty,
        edge_budget = command.edge_budget,
        largest = command.largest,
        override_name = field::Empty,
    ),
)]
pub(super) fn run_command(command: AnalyzeCommand) -> Result<ExecutionSummary, CliError> {
    let AnalyzeCommand {
        path,
        edge_budget,
        largest,
        axis,
        strategy,
        skip_malformed,
        name,
    } = command;

    let proxima = ProximaBuilder::new()
        .with_edge_budget(edge_budget)
        .with_largest_components(largest)
        .with_execution_strategy(strategy.into())
        .build()?;

    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record(
        "override_name",
        field::display(name.as_deref().unwrap_or("<derived>")),
    );

    let mode = if skip_malformed {
        ParseMode::SkipMalformed
    } else {
        ParseMode::Strict
    };
    let chosen_name = derive_data_source_name(&path, name.as_deref());
    let reader = open_text_reader(&path)?;
    let provider = TextPointProvider::try_from_reader(chosen_name, reader, mode)?;
    let report = proxima.run(&provider)?;

    let summary = ExecutionSummary {
        data_source: provider.name().to_owned(),
        report,
        axis: axis.into(),
    };
    info!(
        data_source = summary.data_source.as_str(),
        points = summary.report.point_count(),
        product = summary.product(),
        closing_value = summary.closing_value(),
        "command completed"
    );
    Ok(summary)
}

#[instrument(name = "cli.open_text_reader", err, fields(path = field::Empty))]
pub(super) fn open_text_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "data_source".to_owned())
}

/// Renders `summary` to `writer` in a line-oriented text format.
///
/// Missing results print as `0`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use proxima_cli::cli::{ExecutionSummary, render_summary};
/// # use proxima_core::{Axis, PointStore, ProximaBuilder};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let report = ProximaBuilder::new().build()?.analyze(&PointStore::default())?;
/// let summary = ExecutionSummary { data_source: "demo".into(), report, axis: Axis::X };
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer.into_inner())?,
///     "data source: demo\npoints: 0\nlargest component product: 0\nclosing edge value: 0\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(writer, "points: {}", summary.report.point_count())?;
    writeln!(writer, "largest component product: {}", summary.product())?;
    writeln!(writer, "closing edge value: {}", summary.closing_value())?;
    if let Some((source, target)) = summary.report.closing_points() {
        writeln!(writer, "closing edge: {source} {target}")?;
    }
    Ok(())
}
