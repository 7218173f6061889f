//! Benchmark support crate for randigraph.
//!
//! Provides parameter types and seeded workloads for the Criterion
//! benchmarks comparing the incremental and naive preferential attachment
//! generators, the Erdős–Rényi generator, and the degree statistics.

pub mod error;
pub mod params;
pub mod workload;
