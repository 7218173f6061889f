//! Incremental degree-weighted sampler for preferential attachment.

use std::collections::BTreeSet;

use rand::{Rng, distributions::Standard};
use tracing::trace;

use crate::{Result, error::GraphError, graph::NodeId};

/// Number of full passes over the candidates allowed per requested node
/// before a trial gives up.
const SCAN_PASSES_PER_SAMPLE: usize = 64;

/// Degree state carried across the growth steps of one preferential
/// attachment run.
///
/// Every seed node starts with degree one rather than its in-degree within
/// the seed graph. Each trial adds one node, so a trial state must not be
/// shared between runs without calling [`Self::reset`].
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use randigraph_core::DpaTrial;
///
/// let mut trial = DpaTrial::new(3);
/// let mut rng = SmallRng::seed_from_u64(11);
/// let targets = trial.run_trial(3, &mut rng)?;
/// assert_eq!(targets.len(), 3);
/// assert_eq!(trial.num_nodes(), 4);
/// # Ok::<(), randigraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DpaTrial {
    seed_size: usize,
    node_degrees: Vec<usize>,
    total_degree: usize,
}

impl DpaTrial {
    /// Creates the state for a run whose seed graph has `seed_size` nodes.
    #[must_use]
    pub fn new(seed_size: usize) -> Self {
        Self {
            seed_size,
            node_degrees: vec![1; seed_size],
            total_degree: seed_size,
        }
    }

    /// Restores the state produced by [`Self::new`].
    pub fn reset(&mut self) {
        *self = Self::new(self.seed_size);
    }

    /// Returns the number of nodes the trial currently samples from.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.node_degrees.len()
    }

    /// Returns the tracked degree of every node, indexed by identifier.
    #[must_use]
    pub fn node_degrees(&self) -> &[usize] {
        &self.node_degrees
    }

    /// Returns the sum of all tracked degrees.
    #[must_use]
    pub fn total_degree(&self) -> usize {
        self.total_degree
    }

    /// Draws `sample_size` distinct nodes for the next node to point at and
    /// then records that node.
    ///
    /// Candidates are scanned from node 0 upwards, wrapping around, and each
    /// unselected candidate is accepted with probability
    /// `(degree + 1) / (total_degree + num_nodes)`, with both totals taken
    /// when the call starts. Once the sample is complete every selected node
    /// gains one degree and a new node with degree one is appended.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidSampleSize`] when `sample_size` exceeds the
    /// number of nodes, or when the scan budget is exhausted before enough
    /// nodes are accepted. The state is left untouched on error.
    pub fn run_trial<R: Rng + ?Sized>(
        &mut self,
        sample_size: usize,
        rng: &mut R,
    ) -> Result<BTreeSet<NodeId>> {
        let num_nodes = self.num_nodes();
        if sample_size > num_nodes {
            return Err(GraphError::InvalidSampleSize {
                requested: sample_size,
                available: num_nodes,
            });
        }

        let selected = self.sample(sample_size, rng)?;
        for &node in &selected {
            if let Some(degree) = self.node_degrees.get_mut(node) {
                *degree += 1;
            }
        }
        self.node_degrees.push(1);
        self.total_degree += selected.len() + 1;
        trace!(
            new_node = num_nodes,
            total_degree = self.total_degree,
            "trial recorded"
        );
        Ok(selected)
    }

    fn sample<R: Rng + ?Sized>(
        &self,
        sample_size: usize,
        rng: &mut R,
    ) -> Result<BTreeSet<NodeId>> {
        let mut selected = BTreeSet::new();
        if sample_size == 0 {
            return Ok(selected);
        }

        let denominator = self.total_degree + self.num_nodes();
        let budget = self
            .num_nodes()
            .saturating_mul(SCAN_PASSES_PER_SAMPLE.saturating_mul(sample_size + 1));
        let candidates = self.node_degrees.iter().enumerate().cycle().take(budget);
        for (candidate, &degree) in candidates {
            if selected.contains(&candidate) {
                continue;
            }
            if accept(degree + 1, denominator, rng) {
                selected.insert(candidate);
                if selected.len() == sample_size {
                    return Ok(selected);
                }
            }
        }

        Err(GraphError::InvalidSampleSize {
            requested: sample_size,
            available: self.num_nodes(),
        })
    }
}

/// Accepts with probability `weight / denominator` using one uniform draw.
#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "Acceptance compares a uniform draw against a ratio of degree counts."
)]
pub(super) fn accept<R: Rng + ?Sized>(weight: usize, denominator: usize, rng: &mut R) -> bool {
    let draw: f64 = rng.sample(Standard);
    draw < weight as f64 / denominator as f64
}
