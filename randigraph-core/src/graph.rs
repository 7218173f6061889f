//! Adjacency representation shared by every generator.
//!
//! A [`Digraph`] maps each node identifier to the ordered set of nodes it
//! points at. Generators only ever append nodes, so an existing node's edge
//! set is never rewritten once it is inserted.

use std::collections::{BTreeMap, BTreeSet, btree_map};

use crate::{Result, error::GraphError};

/// Identifier of a node. Identifiers are dense and start at zero.
pub type NodeId = usize;

/// Outgoing edge set of a single node.
pub type Successors = BTreeSet<NodeId>;

/// Directed graph stored as an adjacency map.
///
/// # Examples
/// ```
/// use randigraph_core::Digraph;
///
/// let graph = Digraph::from_adjacency([(0, vec![1, 2]), (1, vec![]), (2, vec![])]);
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.has_edge(0, 2));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Digraph {
    adjacency: BTreeMap<NodeId, Successors>,
}

impl Digraph {
    /// Creates a graph without nodes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from raw `(node, successors)` pairs without validating
    /// edge targets.
    ///
    /// Duplicate successors collapse into one edge. Targets that are not keys
    /// are kept as-is, which lets callers characterise malformed inputs; use
    /// [`Self::try_from_adjacency`] to reject them up front.
    #[must_use]
    pub fn from_adjacency<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, S)>,
        S: IntoIterator<Item = NodeId>,
    {
        let adjacency = entries
            .into_iter()
            .map(|(node, successors)| (node, successors.into_iter().collect()))
            .collect();
        Self { adjacency }
    }

    /// Builds a graph from raw `(node, successors)` pairs and validates it.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] when a node lists itself and
    /// [`GraphError::KeyNotFound`] when a successor is not a key.
    ///
    /// # Examples
    /// ```
    /// use randigraph_core::{Digraph, GraphError};
    ///
    /// let err = Digraph::try_from_adjacency([(0, vec![3])]).unwrap_err();
    /// assert_eq!(err, GraphError::KeyNotFound { node: 3, referenced_by: 0 });
    /// ```
    pub fn try_from_adjacency<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, S)>,
        S: IntoIterator<Item = NodeId>,
    {
        let graph = Self::from_adjacency(entries);
        graph.validate()?;
        Ok(graph)
    }

    /// Checks that no node points at itself and every target is a key.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] or [`GraphError::KeyNotFound`] for the
    /// first offending edge in node order.
    pub fn validate(&self) -> Result<()> {
        for (&node, successors) in &self.adjacency {
            for &target in successors {
                if target == node {
                    return Err(GraphError::SelfLoop { node });
                }
                if !self.adjacency.contains_key(&target) {
                    return Err(GraphError::KeyNotFound {
                        node: target,
                        referenced_by: node,
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns whether the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the total number of directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum()
    }

    /// Returns whether `node` is a key of the graph.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Returns whether the edge `from -> to` exists.
    #[must_use]
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.adjacency
            .get(&from)
            .is_some_and(|successors| successors.contains(&to))
    }

    /// Returns the outgoing edges of `node`, if it is present.
    #[must_use]
    pub fn successors(&self, node: NodeId) -> Option<&Successors> {
        self.adjacency.get(&node)
    }

    /// Returns the out-degree of `node`, if it is present.
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> Option<usize> {
        self.successors(node).map(BTreeSet::len)
    }

    /// Iterates over node identifiers in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Iterates over `(node, successors)` pairs in ascending node order.
    pub fn iter(&self) -> btree_map::Iter<'_, NodeId, Successors> {
        self.adjacency.iter()
    }

    /// Iterates over every edge as a `(source, target)` pair.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(&source, successors)| successors.iter().map(move |&target| (source, target)))
    }

    /// Appends a new node with its outgoing edges.
    ///
    /// Existing nodes are never rewritten.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidParameters`] when `node` is already present
    /// and [`GraphError::SelfLoop`] when `successors` contains `node`.
    pub fn insert_node(&mut self, node: NodeId, successors: Successors) -> Result<()> {
        if successors.contains(&node) {
            return Err(GraphError::SelfLoop { node });
        }
        match self.adjacency.entry(node) {
            btree_map::Entry::Occupied(_) => Err(GraphError::invalid_parameters(format!(
                "node {node} is already present"
            ))),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(successors);
                Ok(())
            }
        }
    }
}

impl<'a> IntoIterator for &'a Digraph {
    type Item = (&'a NodeId, &'a Successors);
    type IntoIter = btree_map::Iter<'a, NodeId, Successors>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::dangling(vec![(0, vec![1])], GraphError::KeyNotFound { node: 1, referenced_by: 0 })]
    #[case::self_loop(vec![(0, vec![0])], GraphError::SelfLoop { node: 0 })]
    fn try_from_adjacency_rejects_malformed_graphs(
        #[case] entries: Vec<(NodeId, Vec<NodeId>)>,
        #[case] expected: GraphError,
    ) {
        let err = Digraph::try_from_adjacency(entries).expect_err("graph is malformed");
        assert_eq!(err, expected);
    }

    #[test]
    fn from_adjacency_collapses_duplicate_successors() {
        let graph = Digraph::from_adjacency([(0, vec![1, 1, 1]), (1, vec![])]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.out_degree(0), Some(1));
    }

    #[test]
    fn insert_node_refuses_to_rewrite_existing_nodes() {
        let mut graph = Digraph::from_adjacency([(0, vec![])]);
        let err = graph
            .insert_node(0, BTreeSet::from([1]))
            .expect_err("node 0 already exists");
        assert!(matches!(err, GraphError::InvalidParameters { .. }));
        assert_eq!(graph.out_degree(0), Some(0));
    }

    #[test]
    fn insert_node_rejects_self_loops() {
        let mut graph = Digraph::new();
        let err = graph
            .insert_node(4, BTreeSet::from([4]))
            .expect_err("self loop must fail");
        assert_eq!(err, GraphError::SelfLoop { node: 4 });
        assert!(graph.is_empty());
    }

    #[test]
    fn edges_are_listed_in_node_order() {
        let graph = Digraph::from_adjacency([(1, vec![0]), (0, vec![2, 1]), (2, vec![])]);
        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges, vec![(0, 1), (0, 2), (1, 0)]);
    }
}
