//! Directed preferential attachment (DPA) generators.
//!
//! Both generators start from a complete seed graph of `m` nodes and append
//! one node at a time, strictly in identifier order, because every step
//! depends on the degrees left behind by the steps before it.
//!
//! - [`generate_dpa`] keeps an incremental [`DpaTrial`] and gives every new
//!   node exactly `m` targets.
//! - [`generate_dpa_naive`] recomputes in-degrees from the whole graph on
//!   each step and accepts every candidate independently, so a new node may
//!   end up with anywhere between zero and all earlier nodes as targets.

mod naive;
mod trial;

use rand::Rng;
use tracing::{debug, instrument, trace};

use crate::{
    Result,
    complete::{CompleteGraph, SeedGraphProvider},
    error::GraphError,
    graph::Digraph,
};

pub use self::{naive::generate_dpa_naive, trial::DpaTrial};

/// Selects which preferential attachment algorithm to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DpaAlgorithm {
    /// Incremental degree tracking with exactly `m` targets per new node.
    #[default]
    Incremental,
    /// Full in-degree recomputation with independent acceptance per candidate.
    Naive,
}

impl DpaAlgorithm {
    /// Returns the lowercase label used in logs and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Incremental => "incremental",
            Self::Naive => "naive",
        }
    }

    /// Runs the selected algorithm.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidParameters`] unless
    /// `1 <= out_degree <= total_nodes`.
    pub fn generate<R: Rng + ?Sized>(
        self,
        total_nodes: usize,
        out_degree: usize,
        rng: &mut R,
    ) -> Result<Digraph> {
        match self {
            Self::Incremental => generate_dpa(total_nodes, out_degree, rng),
            Self::Naive => generate_dpa_naive(total_nodes, out_degree, rng),
        }
    }
}

/// Grows a graph of `total_nodes` nodes by preferential attachment, giving
/// every node after the complete seed of `out_degree` nodes exactly
/// `out_degree` outgoing edges.
///
/// # Errors
/// Returns [`GraphError::InvalidParameters`] unless
/// `1 <= out_degree <= total_nodes`.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use randigraph_core::{generate_dpa, make_complete_graph};
///
/// let mut rng = SmallRng::seed_from_u64(5);
/// let graph = generate_dpa(5, 2, &mut rng)?;
/// assert_eq!(graph.node_count(), 5);
/// assert!((2..5).all(|node| graph.out_degree(node) == Some(2)));
/// assert_eq!(generate_dpa(3, 3, &mut rng)?, make_complete_graph(3));
/// # Ok::<(), randigraph_core::GraphError>(())
/// ```
pub fn generate_dpa<R: Rng + ?Sized>(
    total_nodes: usize,
    out_degree: usize,
    rng: &mut R,
) -> Result<Digraph> {
    generate_dpa_with_seed(total_nodes, out_degree, &CompleteGraph, rng)
}

/// Same as [`generate_dpa`] but grows from the graph returned by `seed`.
///
/// # Errors
/// Returns [`GraphError::InvalidParameters`] unless
/// `1 <= out_degree <= total_nodes`, or when the seed graph does not consist
/// of exactly the nodes `0..out_degree`.
#[instrument(
    name = "randigraph.generate_dpa",
    skip(seed, rng),
    fields(algorithm = DpaAlgorithm::Incremental.as_str()),
    err
)]
pub fn generate_dpa_with_seed<S, R>(
    total_nodes: usize,
    out_degree: usize,
    seed: &S,
    rng: &mut R,
) -> Result<Digraph>
where
    S: SeedGraphProvider + ?Sized,
    R: Rng + ?Sized,
{
    let mut graph = seeded_graph(total_nodes, out_degree, seed)?;
    let mut trial = DpaTrial::new(out_degree);
    for node in out_degree..total_nodes {
        let targets = trial.run_trial(out_degree, rng)?;
        trace!(node, targets = ?targets, "node attached");
        graph.insert_node(node, targets)?;
    }
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "preferential attachment graph generated"
    );
    Ok(graph)
}

pub(crate) fn validate_parameters(total_nodes: usize, out_degree: usize) -> Result<()> {
    if out_degree == 0 {
        return Err(GraphError::invalid_parameters(
            "out_degree must be at least 1",
        ));
    }
    if out_degree > total_nodes {
        return Err(GraphError::invalid_parameters(format!(
            "out_degree ({out_degree}) must not exceed total_nodes ({total_nodes})"
        )));
    }
    Ok(())
}

pub(crate) fn seeded_graph<S: SeedGraphProvider + ?Sized>(
    total_nodes: usize,
    out_degree: usize,
    seed: &S,
) -> Result<Digraph> {
    validate_parameters(total_nodes, out_degree)?;
    let graph = seed.seed_graph(out_degree);
    if !graph.nodes().eq(0..out_degree) {
        return Err(GraphError::invalid_parameters(format!(
            "seed graph must contain exactly the nodes 0..{out_degree}"
        )));
    }
    graph.validate()?;
    Ok(graph)
}
