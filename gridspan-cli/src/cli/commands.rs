//! Command implementations and argument parsing for the gridspan CLI.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand, ValueEnum};
use gridspan_core::{
    Graph, GraphErrorCode, SpanningTree, Verdict, VerifyError, build_mst, verify_mst,
};
use gridspan_providers_mtx::{CostModel, MtxError, MtxSource};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_SEED: u64 = 42;
const DEFAULT_LISTING_LIMIT: usize = 20;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "gridspan", about = "Plan minimum-cost connections for a power grid.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Load a grid dataset, plan connections, and verify the plan.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to a Matrix Market coordinate file describing the grid.
    pub path: PathBuf,

    /// Where edge installation costs come from.
    #[arg(long, value_enum, default_value_t = CostSource::Uniform)]
    pub costs: CostSource,

    /// Seed for synthetic installation costs.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum number of planned connections to list in the report.
    #[arg(
        long = "listing-limit",
        default_value_t = DEFAULT_LISTING_LIMIT,
        value_parser = clap::value_parser!(usize),
    )]
    pub listing_limit: usize,

    /// Override name for the data source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Supported cost assignment strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CostSource {
    /// Draw seeded uniform costs in `[1.0, 100.0)`.
    Uniform,
    /// Read costs from the third column of each entry.
    File,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Matrix Market ingestion failed.
    #[error(transparent)]
    Mtx(#[from] MtxError),
    /// Certification of the planned connections failed to run.
    #[error(transparent)]
    Verify(#[from] VerifyError),
}

impl CliError {
    /// Returns the stable graph error code behind this error, when one exists.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Mtx(MtxError::Graph(graph)) => Some(graph.code()),
            _ => None,
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name reported for the loaded dataset.
    pub data_source: String,
    /// Number of vertices in the loaded grid.
    pub vertices: usize,
    /// Number of undirected edges parsed from the dataset.
    pub edge_count: usize,
    /// Total cost of installing every candidate connection.
    pub graph_cost: f64,
    /// The planned connections.
    pub tree: SpanningTree,
    /// Certification verdict for the plan.
    pub verdict: Verdict,
    /// Wall-clock time spent planning.
    pub elapsed: Duration,
    /// Maximum number of connections to list in the report.
    pub listing_limit: usize,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when ingestion or certification fails.
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(path = field::Empty, costs = field::Empty, seed = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        path,
        costs,
        seed,
        listing_limit,
        name,
    } = command;

    let span = Span::current();
    span.record("path", field::display(path.display()));
    let costs_label = match costs {
        CostSource::Uniform => "uniform",
        CostSource::File => "file",
    };
    span.record("costs", field::display(costs_label));
    span.record("seed", field::display(seed));

    let model = match costs {
        CostSource::Uniform => CostModel::Uniform { seed },
        CostSource::File => CostModel::FromFile,
    };
    let chosen_name = derive_data_source_name(&path, name.as_deref());
    let source = MtxSource::try_from_path(chosen_name, &path, model)?;
    info!(
        data_source = source.name(),
        vertices = source.graph().vertices(),
        edges = source.graph().edge_count(),
        declared_edges = source.declared_edge_count(),
        "dataset loaded"
    );

    let summary = plan_connections(&source, listing_limit)?;
    info!(
        data_source = summary.data_source.as_str(),
        connections = summary.tree.len(),
        total_cost = summary.tree.total_cost(),
        verdict = %summary.verdict,
        elapsed_ms = summary.elapsed.as_secs_f64() * 1_000.0,
        "command completed"
    );
    Ok(summary)
}

#[instrument(name = "cli.plan", err, skip(source), fields(data_source = source.name()))]
pub(super) fn plan_connections(
    source: &MtxSource,
    listing_limit: usize,
) -> Result<ExecutionSummary, CliError> {
    let graph: &Graph = source.graph();

    let started = Instant::now();
    let tree = build_mst(graph);
    let elapsed = started.elapsed();

    let verdict = verify_mst(tree.edges(), graph.vertices())?;

    Ok(ExecutionSummary {
        data_source: source.name().to_owned(),
        vertices: graph.vertices(),
        edge_count: graph.edge_count(),
        graph_cost: graph.total_cost(),
        tree,
        verdict,
        elapsed,
        listing_limit,
    })
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

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(
        writer,
        "grid: {} vertices, {} candidate connections",
        summary.vertices, summary.edge_count
    )?;
    writeln!(
        writer,
        "planned in {:.3} ms",
        summary.elapsed.as_secs_f64() * 1_000.0
    )?;
    writeln!(
        writer,
        "minimum installation cost: {:.2} across {} connections",
        summary.tree.total_cost(),
        summary.tree.len()
    )?;
    if summary.graph_cost > 0.0 {
        let savings = (summary.graph_cost - summary.tree.total_cost()) / summary.graph_cost;
        writeln!(
            writer,
            "full build-out would cost {:.2}; the plan saves {:.1}%",
            summary.graph_cost,
            savings * 100.0
        )?;
    }
    writeln!(writer, "verification: {}", summary.verdict)?;

    let shown = summary.tree.len().min(summary.listing_limit);
    writeln!(writer, "first {shown} connections:")?;
    for edge in summary.tree.edges().iter().take(shown) {
        writeln!(writer, "  {edge}")?;
    }
    let remainder = summary.tree.len() - shown;
    if remainder > 0 {
        writeln!(writer, "  ... and {remainder} more")?;
    }
    Ok(())
}
