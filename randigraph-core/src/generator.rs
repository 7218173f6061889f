//! Builder-configured entry point that owns the RNG seed policy.
//!
//! The free generator functions take any [`rand::Rng`]; [`GraphGenerator`] wraps
//! them with a reproducible [`SmallRng`] and a chosen [`DpaAlgorithm`].

use rand::{SeedableRng, rngs::SmallRng};
use tracing::{info, instrument};

use crate::{Result, dpa::DpaAlgorithm, er::generate_er, graph::Digraph};

/// Configures and constructs [`GraphGenerator`] instances.
///
/// # Examples
/// ```
/// use randigraph_core::{DpaAlgorithm, GraphGeneratorBuilder};
///
/// let generator = GraphGeneratorBuilder::new()
///     .with_rng_seed(42)
///     .with_dpa_algorithm(DpaAlgorithm::Naive)
///     .build();
/// assert_eq!(generator.rng_seed(), Some(42));
/// assert_eq!(generator.dpa_algorithm(), DpaAlgorithm::Naive);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GraphGeneratorBuilder {
    rng_seed: Option<u64>,
    dpa_algorithm: DpaAlgorithm,
}

impl GraphGeneratorBuilder {
    /// Creates a builder that seeds from OS entropy and uses the incremental
    /// preferential attachment algorithm.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the RNG so every generated graph is reproducible.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Applies an optional seed; `None` keeps entropy seeding.
    #[must_use]
    pub fn with_optional_rng_seed(mut self, seed: Option<u64>) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Selects the preferential attachment algorithm.
    #[must_use]
    pub fn with_dpa_algorithm(mut self, algorithm: DpaAlgorithm) -> Self {
        self.dpa_algorithm = algorithm;
        self
    }

    /// Constructs the generator.
    #[must_use]
    pub fn build(self) -> GraphGenerator {
        let rng = match self.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        GraphGenerator {
            rng,
            rng_seed: self.rng_seed,
            dpa_algorithm: self.dpa_algorithm,
        }
    }
}

/// Generates random directed graphs from one RNG stream.
///
/// Successive calls continue the same stream, so two generators built with the
/// same seed produce the same sequence of graphs.
///
/// # Examples
/// ```
/// use randigraph_core::GraphGeneratorBuilder;
///
/// let mut generator = GraphGeneratorBuilder::new().with_rng_seed(7).build();
/// let graph = generator.preferential_attachment(20, 3)?;
/// assert_eq!(graph.node_count(), 20);
/// let random = generator.erdos_renyi(10, 0.2)?;
/// assert_eq!(random.node_count(), 10);
/// # Ok::<(), randigraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GraphGenerator {
    rng: SmallRng,
    rng_seed: Option<u64>,
    dpa_algorithm: DpaAlgorithm,
}

impl GraphGenerator {
    /// Returns the seed the RNG was built from, if one was configured.
    #[must_use]
    pub fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }

    /// Returns the configured preferential attachment algorithm.
    #[must_use]
    pub fn dpa_algorithm(&self) -> DpaAlgorithm {
        self.dpa_algorithm
    }

    /// Generates an Erdős–Rényi graph; see [`generate_er`].
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidParameters`] when `probability` is NaN.
    #[instrument(name = "randigraph.generator.erdos_renyi", skip(self), err)]
    pub fn erdos_renyi(&mut self, num_nodes: usize, probability: f64) -> Result<Digraph> {
        let graph = generate_er(num_nodes, probability, &mut self.rng)?;
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "erdos-renyi generation completed"
        );
        Ok(graph)
    }

    /// Generates a preferential attachment graph with the configured
    /// algorithm.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidParameters`] unless
    /// `1 <= out_degree <= total_nodes`.
    #[instrument(
        name = "randigraph.generator.preferential_attachment",
        skip(self),
        fields(algorithm = self.dpa_algorithm.as_str()),
        err
    )]
    pub fn preferential_attachment(
        &mut self,
        total_nodes: usize,
        out_degree: usize,
    ) -> Result<Digraph> {
        let graph = self
            .dpa_algorithm
            .generate(total_nodes, out_degree, &mut self.rng)?;
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "preferential attachment generation completed"
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;

    use randigraph_test_support::tracing::RecordingLayer;

    use crate::error::GraphError;

    #[test]
    fn builder_defaults_to_entropy_and_incremental() {
        let generator = GraphGeneratorBuilder::new().build();
        assert_eq!(generator.rng_seed(), None);
        assert_eq!(generator.dpa_algorithm(), DpaAlgorithm::Incremental);
    }

    #[test]
    fn seeded_generators_agree() {
        let mut first = GraphGeneratorBuilder::new().with_rng_seed(99).build();
        let mut second = GraphGeneratorBuilder::new()
            .with_optional_rng_seed(Some(99))
            .build();
        assert_eq!(
            first.preferential_attachment(40, 2).expect("first"),
            second.preferential_attachment(40, 2).expect("second")
        );
        assert_eq!(
            first.erdos_renyi(15, 0.3).expect("first"),
            second.erdos_renyi(15, 0.3).expect("second")
        );
    }

    #[test]
    fn invalid_parameters_surface_from_the_generator() {
        let mut generator = GraphGeneratorBuilder::new().with_rng_seed(1).build();
        let err = generator
            .preferential_attachment(2, 5)
            .expect_err("m exceeds total nodes");
        assert!(matches!(err, GraphError::InvalidParameters { .. }));
    }

    #[test]
    fn preferential_attachment_records_span_and_completion_event() {
        let layer = RecordingLayer::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());
        tracing::subscriber::with_default(subscriber, || {
            let mut generator = GraphGeneratorBuilder::new()
                .with_rng_seed(3)
                .with_dpa_algorithm(DpaAlgorithm::Naive)
                .build();
            generator
                .preferential_attachment(12, 2)
                .expect("valid parameters");
        });

        let spans = layer.spans();
        let span = spans
            .iter()
            .find(|span| span.name == "randigraph.generator.preferential_attachment")
            .expect("generator span recorded");
        assert_eq!(span.fields.get("algorithm").map(String::as_str), Some("naive"));
        assert_eq!(span.fields.get("total_nodes").map(String::as_str), Some("12"));
        assert!(
            spans
                .iter()
                .any(|span| span.name == "randigraph.generate_dpa_naive")
        );

        let events = layer.events();
        assert!(events.iter().any(|event| {
            event.level == Level::INFO
                && event.fields.get("message").map(String::as_str)
                    == Some("preferential attachment generation completed")
        }));
    }
}
