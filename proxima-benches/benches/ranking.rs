//! Edge ranking benchmarks.
//!
//! Measures enumeration and sorting of the complete edge set, sequentially
//! and on the rayon pool.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use proxima_benches::{
    error::BenchSetupError,
    params::RankingBenchParams,
    source::{SyntheticConfig, generate},
};
use proxima_core::EdgeRanking;

/// Seed used for all synthetic data generation in this benchmark.
const SEED: u64 = 42;

/// Cloud sizes to benchmark.
const POINT_COUNTS: &[usize] = &[100, 500, 1_000];

fn rank_edges_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("rank_edges");
    group.sample_size(20);

    for &point_count in POINT_COUNTS {
        let store = generate(&SyntheticConfig::uniform(point_count, SEED))?;
        let params = RankingBenchParams { point_count };

        group.bench_with_input(
            BenchmarkId::new("sequential", &params),
            &store,
            |b, store| b.iter(|| EdgeRanking::build(store)),
        );
        group.bench_with_input(
            BenchmarkId::new("parallel", &params),
            &store,
            |b, store| b.iter(|| EdgeRanking::par_build(store)),
        );
    }

    group.finish();
    Ok(())
}

fn rank_edges(c: &mut Criterion) {
    if let Err(err) = rank_edges_impl(c) {
        panic!("rank_edges benchmark setup failed: {err}");
    }
}

criterion_group!(benches, rank_edges);
criterion_main!(benches);
