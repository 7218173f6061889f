//! Degree statistics benchmarks.
//!
//! Measures in-degree counting and distribution normalisation on seeded
//! preferential attachment graphs, isolated from graph generation.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use randigraph_benches::{error::BenchSetupError, params::DpaBenchParams, workload::dpa_graph};
use randigraph_core::{in_degree_distribution, normalize_distribution};

/// Graph sizes to benchmark.
const NODE_COUNTS: &[usize] = &[1_000, 10_000];

/// Out-degree used to grow each graph.
const OUT_DEGREE: usize = 8;

fn degree_stats_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("degree_stats");
    group.sample_size(20);

    for &node_count in NODE_COUNTS {
        let params = DpaBenchParams {
            node_count,
            out_degree: OUT_DEGREE,
        };
        let graph = dpa_graph(&params)?;

        group.bench_with_input(
            BenchmarkId::new("in_degree_distribution", params),
            &graph,
            |b, graph| {
                b.iter(|| {
                    let _distribution = in_degree_distribution(graph);
                });
            },
        );

        let distribution = in_degree_distribution(&graph)?;
        group.bench_with_input(
            BenchmarkId::new("normalize_distribution", params),
            &distribution,
            |b, distribution| {
                b.iter(|| {
                    let _frequencies = normalize_distribution(distribution);
                });
            },
        );
    }

    group.finish();
    Ok(())
}

fn degree_stats(c: &mut Criterion) {
    if let Err(err) = degree_stats_impl(c) {
        panic!("degree_stats benchmark setup failed: {err}");
    }
}

criterion_group!(benches, degree_stats);
criterion_main!(benches);
