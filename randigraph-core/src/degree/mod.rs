//! Degree statistics for directed graph snapshots.
//!
//! Every routine recomputes its answer from the graph it is given; nothing is
//! cached alongside the graph.

use std::collections::BTreeMap;

use tracing::instrument;

use crate::{
    Result,
    error::GraphError,
    graph::{Digraph, NodeId},
};

/// In-degree of every node in a graph.
pub type InDegreeMap = BTreeMap<NodeId, usize>;

/// Out-degree of every node in a graph.
pub type OutDegreeMap = BTreeMap<NodeId, usize>;

/// Maps a degree value to a count or a normalised frequency.
pub type Distribution<V> = BTreeMap<usize, V>;

/// Values that can be normalised into frequencies.
pub trait DistributionValue: Copy {
    /// Converts the value to a floating-point weight.
    fn to_weight(self) -> f64;
}

impl DistributionValue for usize {
    #[expect(
        clippy::cast_precision_loss,
        reason = "Node counts stay far below 2^52 for in-memory graphs."
    )]
    fn to_weight(self) -> f64 {
        self as f64
    }
}

impl DistributionValue for u64 {
    #[expect(
        clippy::cast_precision_loss,
        reason = "Node counts stay far below 2^52 for in-memory graphs."
    )]
    fn to_weight(self) -> f64 {
        self as f64
    }
}

impl DistributionValue for u32 {
    fn to_weight(self) -> f64 {
        f64::from(self)
    }
}

impl DistributionValue for f64 {
    fn to_weight(self) -> f64 {
        self
    }
}

/// Counts the incoming edges of every node.
///
/// Every key of `graph` appears in the result, including nodes without
/// incoming edges.
///
/// # Errors
/// Returns [`GraphError::KeyNotFound`] when an edge targets a node that is not
/// a key of `graph`.
///
/// # Examples
/// ```
/// use randigraph_core::{Digraph, compute_in_degrees};
///
/// let graph = Digraph::from_adjacency([(0, vec![1, 2]), (1, vec![]), (2, vec![])]);
/// let in_degrees = compute_in_degrees(&graph)?;
/// assert_eq!(in_degrees.into_iter().collect::<Vec<_>>(), [(0, 0), (1, 1), (2, 1)]);
/// # Ok::<(), randigraph_core::GraphError>(())
/// ```
pub fn compute_in_degrees(graph: &Digraph) -> Result<InDegreeMap> {
    let mut in_degrees: InDegreeMap = graph.nodes().map(|node| (node, 0)).collect();
    for (source, target) in graph.edges() {
        let count = in_degrees
            .get_mut(&target)
            .ok_or(GraphError::KeyNotFound {
                node: target,
                referenced_by: source,
            })?;
        *count += 1;
    }
    Ok(in_degrees)
}

/// Counts the outgoing edges of every node.
///
/// # Examples
/// ```
/// use randigraph_core::{compute_out_degrees, make_complete_graph};
///
/// let out_degrees = compute_out_degrees(&make_complete_graph(3));
/// assert!(out_degrees.values().all(|&degree| degree == 2));
/// ```
#[must_use]
pub fn compute_out_degrees(graph: &Digraph) -> OutDegreeMap {
    graph
        .iter()
        .map(|(&node, successors)| (node, successors.len()))
        .collect()
}

/// Tallies how many nodes share each in-degree.
///
/// # Errors
/// Propagates [`GraphError::KeyNotFound`] from [`compute_in_degrees`].
///
/// # Examples
/// ```
/// use randigraph_core::{in_degree_distribution, make_complete_graph};
///
/// let distribution = in_degree_distribution(&make_complete_graph(4))?;
/// assert_eq!(distribution.into_iter().collect::<Vec<_>>(), [(3, 4)]);
/// # Ok::<(), randigraph_core::GraphError>(())
/// ```
#[instrument(
    name = "randigraph.in_degree_distribution",
    level = "debug",
    skip(graph),
    fields(nodes = graph.node_count()),
    err
)]
pub fn in_degree_distribution(graph: &Digraph) -> Result<Distribution<usize>> {
    let in_degrees = compute_in_degrees(graph)?;
    let mut distribution = Distribution::new();
    for degree in in_degrees.into_values() {
        *distribution.entry(degree).or_insert(0) += 1;
    }
    Ok(distribution)
}

/// Divides every value by the sum of all values so the result sums to one.
///
/// Applying it to an already normalised distribution returns the same
/// frequencies up to floating-point tolerance.
///
/// # Errors
/// Returns [`GraphError::DivisionByZero`] when the values sum to zero, which
/// includes the empty distribution, and [`GraphError::InvalidParameters`]
/// when a value or the sum is not finite.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use randigraph_core::normalize_distribution;
///
/// let counts = BTreeMap::from([(0_usize, 1_usize), (1, 3)]);
/// let frequencies = normalize_distribution(&counts)?;
/// assert_eq!(frequencies.get(&1), Some(&0.75));
/// # Ok::<(), randigraph_core::GraphError>(())
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "Normalisation divides counts into frequencies."
)]
pub fn normalize_distribution<V: DistributionValue>(
    distribution: &Distribution<V>,
) -> Result<Distribution<f64>> {
    if let Some((degree, _)) = distribution
        .iter()
        .find(|(_, value)| !value.to_weight().is_finite())
    {
        return Err(GraphError::invalid_parameters(format!(
            "value for degree {degree} is not finite"
        )));
    }
    let total: f64 = distribution.values().map(|value| value.to_weight()).sum();
    if !total.is_finite() {
        return Err(GraphError::invalid_parameters(
            "distribution values sum to a non-finite total",
        ));
    }
    if total == 0.0 {
        return Err(GraphError::DivisionByZero);
    }
    Ok(distribution
        .iter()
        .map(|(&degree, value)| (degree, value.to_weight() / total))
        .collect())
}

/// Aggregate degree figures for a graph snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct DegreeSummary {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of directed edges.
    pub edge_count: usize,
    /// Smallest in-degree, or `None` for an empty graph.
    pub min_in_degree: Option<usize>,
    /// Largest in-degree, or `None` for an empty graph.
    pub max_in_degree: Option<usize>,
    /// Mean out-degree; zero for an empty graph.
    pub mean_out_degree: f64,
}

impl DegreeSummary {
    /// Summarises `graph`.
    ///
    /// # Errors
    /// Propagates [`GraphError::KeyNotFound`] from [`compute_in_degrees`].
    ///
    /// # Examples
    /// ```
    /// use randigraph_core::{DegreeSummary, make_complete_graph};
    ///
    /// let summary = DegreeSummary::from_graph(&make_complete_graph(4))?;
    /// assert_eq!(summary.edge_count, 12);
    /// assert_eq!(summary.max_in_degree, Some(3));
    /// assert_eq!(summary.mean_out_degree, 3.0);
    /// # Ok::<(), randigraph_core::GraphError>(())
    /// ```
    #[expect(
        clippy::float_arithmetic,
        reason = "The mean out-degree is a ratio of counts."
    )]
    pub fn from_graph(graph: &Digraph) -> Result<Self> {
        let in_degrees = compute_in_degrees(graph)?;
        let node_count = graph.node_count();
        let edge_count = graph.edge_count();
        let mean_out_degree = if node_count == 0 {
            0.0
        } else {
            edge_count.to_weight() / node_count.to_weight()
        };
        Ok(Self {
            node_count,
            edge_count,
            min_in_degree: in_degrees.values().copied().min(),
            max_in_degree: in_degrees.values().copied().max(),
            mean_out_degree,
        })
    }
}
