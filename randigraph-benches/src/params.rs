//! Benchmark parameter types.
//!
//! Each type renders as a compact Criterion benchmark id.

use std::fmt;

/// Parameters for a preferential attachment benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct DpaBenchParams {
    /// Number of nodes in the final graph.
    pub node_count: usize,
    /// Out-degree of every grown node.
    pub out_degree: usize,
}

impl fmt::Display for DpaBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.node_count, self.out_degree)
    }
}

/// Parameters for an Erdős–Rényi benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct ErBenchParams {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Edge probability for each ordered pair.
    pub probability: f64,
}

impl fmt::Display for ErBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}", self.node_count, self.probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn params_render_compact_ids() {
        let dpa = DpaBenchParams {
            node_count: 1_000,
            out_degree: 5,
        };
        assert_eq!(dpa.to_string(), "n=1000,m=5");

        let er = ErBenchParams {
            node_count: 200,
            probability: 0.25,
        };
        assert_eq!(er.to_string(), "n=200,p=0.25");
    }
}
