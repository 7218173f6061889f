//! Complete-graph seed provider used to bootstrap preferential attachment.

use std::collections::BTreeSet;

use crate::graph::{Digraph, NodeId};

/// Source of the initial graph that preferential attachment grows from.
///
/// Implementations must return a graph whose node identifiers are exactly
/// `0..size`.
///
/// # Examples
/// ```
/// use randigraph_core::{CompleteGraph, SeedGraphProvider};
///
/// let seed = CompleteGraph.seed_graph(3);
/// assert_eq!(seed.node_count(), 3);
/// assert_eq!(seed.edge_count(), 6);
/// ```
pub trait SeedGraphProvider {
    /// Builds the seed graph over `size` nodes.
    fn seed_graph(&self, size: usize) -> Digraph;
}

/// Seeds growth with a complete directed graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompleteGraph;

impl SeedGraphProvider for CompleteGraph {
    fn seed_graph(&self, size: usize) -> Digraph {
        make_complete_graph(size)
    }
}

/// Returns the directed graph over `num_nodes` nodes with every possible
/// non-loop edge.
///
/// # Examples
/// ```
/// use randigraph_core::make_complete_graph;
///
/// let graph = make_complete_graph(4);
/// assert_eq!(graph.edge_count(), 12);
/// assert!(!graph.has_edge(2, 2));
/// assert!(make_complete_graph(0).is_empty());
/// ```
#[must_use]
pub fn make_complete_graph(num_nodes: usize) -> Digraph {
    Digraph::from_adjacency((0..num_nodes).map(|node| (node, others(node, num_nodes))))
}

fn others(node: NodeId, num_nodes: usize) -> BTreeSet<NodeId> {
    (0..num_nodes).filter(|&neighbour| neighbour != node).collect()
}
