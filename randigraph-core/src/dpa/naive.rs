//! Reference preferential attachment that rescans the whole graph per step.

use std::collections::BTreeSet;

use rand::Rng;
use tracing::{debug, instrument, trace};

use super::{DpaAlgorithm, seeded_graph, trial::accept};
use crate::{
    Result,
    complete::CompleteGraph,
    degree::compute_in_degrees,
    graph::{Digraph, NodeId},
};

/// Grows a graph by preferential attachment, recomputing every in-degree
/// before each new node is added.
///
/// Each existing node is accepted as a target independently with probability
/// `(in_degree + 1) / (total_in_degree + current_size)`. There is no retry
/// loop, so a new node may receive any number of edges from zero up to the
/// current graph size. Prefer [`super::generate_dpa`]; this variant is quadratic
/// per step and exists to reproduce legacy output.
///
/// # Errors
/// Returns [`crate::GraphError::InvalidParameters`] unless
/// `1 <= out_degree <= total_nodes`.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use randigraph_core::generate_dpa_naive;
///
/// let mut rng = SmallRng::seed_from_u64(3);
/// let graph = generate_dpa_naive(10, 2, &mut rng)?;
/// assert_eq!(graph.node_count(), 10);
/// assert!(graph.edges().all(|(source, target)| target < source || source < 2));
/// # Ok::<(), randigraph_core::GraphError>(())
/// ```
#[instrument(
    name = "randigraph.generate_dpa_naive",
    skip(rng),
    fields(algorithm = DpaAlgorithm::Naive.as_str()),
    err
)]
pub fn generate_dpa_naive<R: Rng + ?Sized>(
    total_nodes: usize,
    out_degree: usize,
    rng: &mut R,
) -> Result<Digraph> {
    let mut graph = seeded_graph(total_nodes, out_degree, &CompleteGraph)?;
    for node in out_degree..total_nodes {
        let targets = sample_targets(&graph, rng)?;
        trace!(node, out_degree = targets.len(), "node attached");
        graph.insert_node(node, targets)?;
    }
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "naive preferential attachment graph generated"
    );
    Ok(graph)
}

fn sample_targets<R: Rng + ?Sized>(graph: &Digraph, rng: &mut R) -> Result<BTreeSet<NodeId>> {
    let in_degrees = compute_in_degrees(graph)?;
    let total_in_degree: usize = in_degrees.values().sum();
    let denominator = total_in_degree + graph.node_count();
    Ok(in_degrees
        .into_iter()
        .filter(|&(_, in_degree)| accept(in_degree + 1, denominator, rng))
        .map(|(node, _)| node)
        .collect())
}
