//! Randigraph core library.
//!
//! Generates directed graphs under the Erdős–Rényi and directed preferential
//! attachment models and computes their in-degree statistics. Graphs are
//! plain adjacency maps; persisting or analysing them is left to callers.

mod complete;
mod degree;
mod dpa;
mod er;
mod error;
pub mod fixtures;
mod generator;
mod graph;
#[cfg(test)]
mod test_utils;

pub use crate::{
    complete::{CompleteGraph, SeedGraphProvider, make_complete_graph},
    degree::{
        DegreeSummary, Distribution, DistributionValue, InDegreeMap, OutDegreeMap,
        compute_in_degrees, compute_out_degrees, in_degree_distribution, normalize_distribution,
    },
    dpa::{DpaAlgorithm, DpaTrial, generate_dpa, generate_dpa_naive, generate_dpa_with_seed},
    er::generate_er,
    error::{GraphError, GraphErrorCode, Result},
    fixtures::{EX_GRAPH0, EX_GRAPH1, EX_GRAPH2},
    generator::{GraphGenerator, GraphGeneratorBuilder},
    graph::{Digraph, NodeId, Successors},
};
