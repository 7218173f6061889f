//! Command implementations and argument parsing for the randigraph CLI.

use std::fmt;
use std::io::{self, Write};

use clap::{Args, Parser, Subcommand, ValueEnum};
use randigraph_core::{
    DegreeSummary, Digraph, Distribution, DpaAlgorithm, EX_GRAPH0, EX_GRAPH1, EX_GRAPH2,
    GraphError, GraphGeneratorBuilder, fixtures::example_graph, in_degree_distribution,
    make_complete_graph, normalize_distribution,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_COMPLETE_NODES: usize = 4;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "randigraph",
    about = "Generate random directed graphs and summarise their in-degrees."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate an Erdős–Rényi graph.
    Er(ErArgs),
    /// Generate a directed preferential attachment graph.
    Dpa(DpaArgs),
    /// Summarise a built-in graph.
    Stats(StatsArgs),
}

/// Options accepted by the `er` command.
#[derive(Debug, Args, Clone)]
pub struct ErArgs {
    /// Number of nodes to generate.
    #[arg(long = "nodes", value_parser = clap::value_parser!(usize))]
    pub nodes: usize,

    /// Probability of each ordered pair becoming an edge.
    #[arg(long = "probability")]
    pub probability: f64,

    /// Seed for a reproducible run; entropy is used when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Options accepted by the `dpa` command.
#[derive(Debug, Args, Clone)]
pub struct DpaArgs {
    /// Total number of nodes in the final graph.
    #[arg(long = "nodes", value_parser = clap::value_parser!(usize))]
    pub nodes: usize,

    /// Out-degree of every node added after the complete seed graph.
    #[arg(long = "out-degree", value_parser = clap::value_parser!(usize))]
    pub out_degree: usize,

    /// Sampling algorithm used to pick attachment targets.
    #[arg(long, value_enum, default_value_t = Algorithm::Incremental)]
    pub algorithm: Algorithm,

    /// Seed for a reproducible run; entropy is used when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Preferential attachment algorithms exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Maintain degree state across steps.
    Incremental,
    /// Recompute in-degrees for every new node.
    Naive,
}

impl From<Algorithm> for DpaAlgorithm {
    fn from(value: Algorithm) -> Self {
        match value {
            Algorithm::Incremental => Self::Incremental,
            Algorithm::Naive => Self::Naive,
        }
    }
}

/// Options accepted by the `stats` command.
#[derive(Debug, Args, Clone)]
pub struct StatsArgs {
    /// Built-in graph to summarise.
    #[arg(value_enum)]
    pub fixture: Fixture,

    /// Node count for the `complete` fixture; ignored otherwise.
    #[arg(long = "nodes", default_value_t = DEFAULT_COMPLETE_NODES)]
    pub nodes: usize,
}

/// Built-in graphs available to the `stats` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Fixture {
    /// Three-node star.
    ExGraph0,
    /// Seven-node graph with one cycle.
    ExGraph1,
    /// Ten-node graph with a high fan-out node.
    ExGraph2,
    /// Complete directed graph of `--nodes` nodes.
    Complete,
}

impl Fixture {
    fn label(self) -> &'static str {
        match self {
            Self::ExGraph0 => "ex-graph0",
            Self::ExGraph1 => "ex-graph1",
            Self::ExGraph2 => "ex-graph2",
            Self::Complete => "complete",
        }
    }

    fn build(self, nodes: usize) -> Digraph {
        match self {
            Self::ExGraph0 => example_graph(EX_GRAPH0),
            Self::ExGraph1 => example_graph(EX_GRAPH1),
            Self::ExGraph2 => example_graph(EX_GRAPH2),
            Self::Complete => make_complete_graph(nodes),
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Graph generation or analysis failed.
    #[error(transparent)]
    Core(#[from] GraphError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionSummary {
    /// Label of the model or fixture that produced the graph.
    pub model: String,
    /// Aggregate node, edge and degree figures.
    pub summary: DegreeSummary,
    /// Number of nodes with each in-degree.
    pub distribution: Distribution<usize>,
    /// `distribution` normalised to frequencies; empty for an empty graph.
    pub frequencies: Distribution<f64>,
}

impl ExecutionSummary {
    fn from_graph(model: impl Into<String>, graph: &Digraph) -> Result<Self, CliError> {
        let summary = DegreeSummary::from_graph(graph)?;
        let distribution = in_degree_distribution(graph)?;
        let frequencies = if distribution.is_empty() {
            Distribution::new()
        } else {
            normalize_distribution(&distribution)?
        };
        Ok(Self {
            model: model.into(),
            summary,
            distribution,
            frequencies,
        })
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when graph generation or analysis fails.
///
/// # Examples
/// ```
/// # use randigraph_cli::cli::{Cli, Command, Fixture, StatsArgs, run_cli};
/// let cli = Cli {
///     command: Command::Stats(StatsArgs {
///         fixture: Fixture::Complete,
///         nodes: 4,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.summary.edge_count, 12);
/// assert_eq!(summary.distribution.get(&3), Some(&4));
/// # Ok::<(), randigraph_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    let summary = match cli.command {
        Command::Er(args) => {
            span.record("command", field::display("er"));
            run_er(args)?
        }
        Command::Dpa(args) => {
            span.record("command", field::display("dpa"));
            run_dpa(args)?
        }
        Command::Stats(args) => {
            span.record("command", field::display("stats"));
            run_stats(args)?
        }
    };

    info!(
        model = summary.model.as_str(),
        nodes = summary.summary.node_count,
        edges = summary.summary.edge_count,
        "command completed"
    );
    Ok(summary)
}

#[instrument(
    name = "cli.run_er",
    err,
    skip(args),
    fields(nodes = args.nodes, probability = args.probability, seeded = args.seed.is_some()),
)]
pub(super) fn run_er(args: ErArgs) -> Result<ExecutionSummary, CliError> {
    let mut generator = GraphGeneratorBuilder::new()
        .with_optional_rng_seed(args.seed)
        .build();
    let graph = generator.erdos_renyi(args.nodes, args.probability)?;
    ExecutionSummary::from_graph("er", &graph)
}

#[instrument(
    name = "cli.run_dpa",
    err,
    skip(args),
    fields(
        nodes = args.nodes,
        out_degree = args.out_degree,
        algorithm = field::Empty,
        seeded = args.seed.is_some(),
    ),
)]
pub(super) fn run_dpa(args: DpaArgs) -> Result<ExecutionSummary, CliError> {
    let algorithm = DpaAlgorithm::from(args.algorithm);
    Span::current().record("algorithm", field::display(algorithm.as_str()));
    let mut generator = GraphGeneratorBuilder::new()
        .with_optional_rng_seed(args.seed)
        .with_dpa_algorithm(algorithm)
        .build();
    let graph = generator.preferential_attachment(args.nodes, args.out_degree)?;
    ExecutionSummary::from_graph(format!("dpa-{}", algorithm.as_str()), &graph)
}

#[instrument(
    name = "cli.run_stats",
    err,
    skip(args),
    fields(fixture = args.fixture.label(), nodes = field::Empty),
)]
pub(super) fn run_stats(args: StatsArgs) -> Result<ExecutionSummary, CliError> {
    let graph = args.fixture.build(args.nodes);
    Span::current().record("nodes", graph.node_count());
    ExecutionSummary::from_graph(args.fixture.label(), &graph)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// The header lines carry the model, counts, and degree extremes (`-` for an
/// empty graph); each following line holds an in-degree, the number of nodes
/// with it, and their frequency.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use randigraph_cli::cli::{Cli, Command, Fixture, StatsArgs, render_summary, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = run_cli(Cli {
///     command: Command::Stats(StatsArgs {
///         fixture: Fixture::ExGraph0,
///         nodes: 4,
///     }),
/// })?;
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.starts_with("model: ex-graph0\nnodes: 3\nedges: 2\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let stats = &summary.summary;
    writeln!(writer, "model: {}", summary.model)?;
    writeln!(writer, "nodes: {}", stats.node_count)?;
    writeln!(writer, "edges: {}", stats.edge_count)?;
    writeln!(writer, "min in-degree: {}", DegreeLabel(stats.min_in_degree))?;
    writeln!(writer, "max in-degree: {}", DegreeLabel(stats.max_in_degree))?;
    writeln!(writer, "mean out-degree: {:.4}", stats.mean_out_degree)?;
    for (degree, count) in &summary.distribution {
        let frequency = summary.frequencies.get(degree).copied().unwrap_or(0.0);
        writeln!(writer, "{degree}\t{count}\t{frequency:.6}")?;
    }
    Ok(())
}

struct DegreeLabel(Option<usize>);

impl fmt::Display for DegreeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(degree) => write!(f, "{degree}"),
            None => f.write_str("-"),
        }
    }
}
