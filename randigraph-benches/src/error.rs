//! Benchmark setup error type.
//!
//! Lets workload builders propagate failures with `?` instead of `.expect()`.

use randigraph_core::GraphError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Graph generation or analysis failed.
    #[error("graph operation failed: {0}")]
    Graph(#[from] GraphError),
}
