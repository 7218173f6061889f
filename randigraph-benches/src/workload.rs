//! Seeded workloads shared by the benchmarks.

use rand::{SeedableRng, rngs::SmallRng};
use randigraph_core::{Digraph, generate_dpa};

use crate::{error::BenchSetupError, params::DpaBenchParams};

/// Seed used for every benchmark RNG.
pub const SEED: u64 = 42;

/// Returns the RNG every benchmark iteration starts from.
#[must_use]
pub fn seeded_rng() -> SmallRng {
    SmallRng::seed_from_u64(SEED)
}

/// Builds the preferential attachment graph described by `params`.
///
/// # Errors
/// Returns [`BenchSetupError::Graph`] when the generator rejects the
/// parameters.
pub fn dpa_graph(params: &DpaBenchParams) -> Result<Digraph, BenchSetupError> {
    let mut rng = seeded_rng();
    Ok(generate_dpa(params.node_count, params.out_degree, &mut rng)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use randigraph_core::GraphError;
    use rstest::rstest;

    #[rstest]
    fn zero_out_degree_is_rejected() {
        let params = DpaBenchParams {
            node_count: 10,
            out_degree: 0,
        };
        assert!(matches!(
            dpa_graph(&params),
            Err(BenchSetupError::Graph(GraphError::InvalidParameters { .. }))
        ));
    }

    #[rstest]
    fn workload_is_deterministic() -> Result<(), BenchSetupError> {
        let params = DpaBenchParams {
            node_count: 50,
            out_degree: 3,
        };
        assert_eq!(dpa_graph(&params)?, dpa_graph(&params)?);
        Ok(())
    }
}
