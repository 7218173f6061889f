//! Shared test utilities for `randigraph-core`.

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use randigraph_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::graph::{Digraph, NodeId};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROPTEST_CASES` and
/// `RANDIGRAPH_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Generates well-formed graphs with up to `max_nodes` nodes.
///
/// Each node receives an arbitrary subset of the other nodes as successors,
/// so the result never contains self-loops or dangling targets.
pub(crate) fn digraph_strategy(max_nodes: usize) -> impl Strategy<Value = Digraph> {
    (0..=max_nodes).prop_flat_map(|node_count| {
        proptest::collection::vec(
            proptest::collection::vec(any::<bool>(), node_count),
            node_count,
        )
        .prop_map(move |rows| {
            Digraph::from_adjacency(rows.into_iter().enumerate().map(|(node, row)| {
                let successors: Vec<NodeId> = row
                    .into_iter()
                    .enumerate()
                    .filter(|&(target, keep)| keep && target != node)
                    .map(|(target, _)| target)
                    .collect();
                (node, successors)
            }))
        })
    })
}
