//! Small hand-built directed graphs for tests and demonstrations.
//!
//! The constants list `(node, successors)` pairs; [`example_graph`] turns one
//! into a [`Digraph`].

use crate::graph::{Digraph, NodeId};

/// Adjacency listing of a fixture graph.
pub type AdjacencyList = &'static [(NodeId, &'static [NodeId])];

/// Three nodes: node 0 points at the other two.
pub const EX_GRAPH0: AdjacencyList = &[(0, &[1, 2]), (1, &[]), (2, &[])];

/// Seven nodes containing the cycle `0 -> 1 -> 2 -> 3 -> 0`.
pub const EX_GRAPH1: AdjacencyList = &[
    (0, &[1, 4, 5]),
    (1, &[2, 6]),
    (2, &[3]),
    (3, &[0]),
    (4, &[1]),
    (5, &[2]),
    (6, &[]),
];

/// Ten nodes; node 9 fans out to six others.
pub const EX_GRAPH2: AdjacencyList = &[
    (0, &[1, 4, 5]),
    (1, &[2, 6]),
    (2, &[3, 7]),
    (3, &[7]),
    (4, &[1]),
    (5, &[2]),
    (6, &[]),
    (7, &[3]),
    (8, &[1, 2]),
    (9, &[0, 4, 5, 6, 7, 3]),
];

/// Builds a [`Digraph`] from one of the fixture listings.
///
/// # Examples
/// ```
/// use randigraph_core::fixtures::{EX_GRAPH1, example_graph};
///
/// let graph = example_graph(EX_GRAPH1);
/// assert_eq!(graph.node_count(), 7);
/// assert_eq!(graph.edge_count(), 9);
/// ```
#[must_use]
pub fn example_graph(listing: AdjacencyList) -> Digraph {
    Digraph::from_adjacency(
        listing
            .iter()
            .map(|&(node, successors)| (node, successors.iter().copied())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::graph0(EX_GRAPH0, 3, 2)]
    #[case::graph1(EX_GRAPH1, 7, 9)]
    #[case::graph2(EX_GRAPH2, 10, 19)]
    fn fixtures_are_well_formed(
        #[case] listing: AdjacencyList,
        #[case] nodes: usize,
        #[case] edges: usize,
    ) {
        let graph = example_graph(listing);
        assert_eq!(graph.node_count(), nodes);
        assert_eq!(graph.edge_count(), edges);
        assert!(graph.validate().is_ok());
    }
}
