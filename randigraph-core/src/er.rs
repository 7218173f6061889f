//! Erdős–Rényi construction over ordered node pairs.

use std::collections::BTreeSet;

use rand::{Rng, distributions::Standard};
use tracing::{debug, instrument};

use crate::{
    Result,
    error::GraphError,
    graph::{Digraph, NodeId},
};

/// Builds a directed graph over `num_nodes` nodes where every ordered pair
/// `(i, j)` with `i != j` receives the edge `i -> j` independently with
/// probability `probability`.
///
/// One uniform draw in `[0, 1)` is taken per pair and the edge is kept when
/// the draw is strictly below `probability`, so `0` (or less) yields no edges
/// and `1` (or more) yields the complete graph.
///
/// # Errors
/// Returns [`GraphError::InvalidParameters`] when `probability` is NaN.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use randigraph_core::{generate_er, make_complete_graph};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// assert_eq!(generate_er(5, 1.0, &mut rng)?, make_complete_graph(5));
/// assert_eq!(generate_er(5, 0.0, &mut rng)?.edge_count(), 0);
/// # Ok::<(), randigraph_core::GraphError>(())
/// ```
#[instrument(
    name = "randigraph.generate_er",
    skip(rng),
    err
)]
pub fn generate_er<R: Rng + ?Sized>(
    num_nodes: usize,
    probability: f64,
    rng: &mut R,
) -> Result<Digraph> {
    if probability.is_nan() {
        return Err(GraphError::invalid_parameters(
            "edge probability must be a number",
        ));
    }

    let mut graph = Digraph::new();
    for node in 0..num_nodes {
        let successors = sample_successors(node, num_nodes, probability, rng);
        graph.insert_node(node, successors)?;
    }
    debug!(edges = graph.edge_count(), "erdos-renyi graph generated");
    Ok(graph)
}

fn sample_successors<R: Rng + ?Sized>(
    node: NodeId,
    num_nodes: usize,
    probability: f64,
    rng: &mut R,
) -> BTreeSet<NodeId> {
    (0..num_nodes)
        .filter(|&neighbour| neighbour != node)
        .filter(|_| {
            let draw: f64 = rng.sample(Standard);
            draw < probability
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    use crate::{
        complete::make_complete_graph,
        test_utils::suite_proptest_config,
    };

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(6)]
    fn zero_probability_keeps_nodes_without_edges(#[case] nodes: usize) {
        let mut rng = SmallRng::seed_from_u64(1);
        let graph = generate_er(nodes, 0.0, &mut rng).expect("valid parameters");
        assert_eq!(graph.node_count(), nodes);
        assert_eq!(graph.edge_count(), 0);
    }

    #[rstest]
    #[case(1.0)]
    #[case(1.5)]
    fn saturated_probability_yields_complete_graph(#[case] probability: f64) {
        let mut rng = SmallRng::seed_from_u64(2);
        let graph = generate_er(6, probability, &mut rng).expect("valid parameters");
        assert_eq!(graph, make_complete_graph(6));
    }

    #[test]
    fn negative_probability_yields_no_edges() {
        let mut rng = SmallRng::seed_from_u64(3);
        let graph = generate_er(4, -0.5, &mut rng).expect("negative is accepted");
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn nan_probability_is_rejected() {
        let mut rng = SmallRng::seed_from_u64(4);
        let err = generate_er(4, f64::NAN, &mut rng).expect_err("NaN must fail");
        assert!(matches!(err, GraphError::InvalidParameters { .. }));
    }

    #[test]
    fn edge_density_tracks_probability() {
        let mut rng = SmallRng::seed_from_u64(5);
        let graph = generate_er(60, 0.3, &mut rng).expect("valid parameters");
        let pairs = 60 * 59;
        let edges = graph.edge_count();
        // Expected 1062 edges; the band spans over six standard deviations each side.
        assert!(
            (pairs * 25 / 100..=pairs * 35 / 100).contains(&edges),
            "edge count {edges} outside expected band"
        );
    }

    #[test]
    fn same_seed_reproduces_graph() {
        let first = generate_er(20, 0.4, &mut SmallRng::seed_from_u64(9)).expect("first");
        let second = generate_er(20, 0.4, &mut SmallRng::seed_from_u64(9)).expect("second");
        assert_eq!(first, second);
    }

    proptest! {
        #![proptest_config(suite_proptest_config(64))]

        #[test]
        fn generated_graphs_are_well_formed(
            nodes in 0_usize..24,
            probability in 0.0_f64..=1.0,
            seed in any::<u64>(),
        ) {
            let graph = generate_er(nodes, probability, &mut SmallRng::seed_from_u64(seed))?;
            prop_assert_eq!(graph.node_count(), nodes);
            prop_assert!(graph.validate().is_ok());
            prop_assert!(graph.edge_count() <= nodes * nodes.saturating_sub(1));
        }
    }
}
