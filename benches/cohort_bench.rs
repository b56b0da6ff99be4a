//! Criterion benchmarks for chromosome decoding.
//!
//! Uses a synthetic record store (random attributes, five rate buckets) to
//! measure one decode per policy as the store grows.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_cohort::evaluator::{Decoder, GroupingPolicy, PartitionConfig, PartitionEvaluator};
use u_cohort::record::{Record, RecordStore};

const FEATURES: usize = 5;
const GROUPS: usize = 6;

fn synthetic_store(n: usize, rng: &mut StdRng) -> RecordStore {
    let names = (0..FEATURES).map(|i| format!("attr{i}")).collect();
    let records = (0..n)
        .map(|_| {
            let attributes = (0..FEATURES).map(|_| rng.random_range(1..=5)).collect();
            let rate = f64::from(rng.random_range(1..=5u32));
            Record::new(attributes, rate, rng.random_bool(0.3))
        })
        .collect();
    RecordStore::new(names, records).expect("synthetic store is valid")
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    group.sample_size(20);

    for policy in [GroupingPolicy::Hard, GroupingPolicy::Soft] {
        for &n in &[1_000, 10_000] {
            let mut rng = StdRng::seed_from_u64(42);
            let store = synthetic_store(n, &mut rng);
            let config = PartitionConfig::new(GROUPS, FEATURES)
                .with_policy(policy)
                .with_minimum_group_size(50);
            let evaluator = PartitionEvaluator::new(store, config).expect("valid config");
            let keys: Vec<f64> = (0..evaluator.chromosome_length())
                .map(|_| rng.random_range(0.0..1.0))
                .collect();

            group.bench_with_input(
                BenchmarkId::new(format!("{policy:?}"), n),
                &(evaluator, keys),
                |b, (e, k)| {
                    b.iter(|| {
                        let fitness = e.decode(black_box(k), false);
                        black_box(fitness)
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
