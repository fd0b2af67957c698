//! Criterion benchmarks for the generation engine.
//!
//! Measures per-family sequential throughput at a fixed sequence length,
//! and sequential versus parallel uniform generation across lengths to
//! characterise where the striped fill pays for its thread spawn cost.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use variate_core::catalog::{DistributionSpec, Family, UniformParams};
use variate_engine::Generator;

/// Benchmark every catalog family through the family-agnostic entry.
fn bench_per_family_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("per_family_sequential");
    let n = 100_000;
    group.throughput(Throughput::Elements(n as u64));

    let generator = Generator::from_seed(42);
    for family in Family::ALL {
        let spec = DistributionSpec::with_defaults(family);
        group.bench_with_input(BenchmarkId::from_parameter(family), &spec, |b, spec| {
            b.iter(|| generator.generate(black_box(spec), black_box(n)).unwrap());
        });
    }
    group.finish();
}

/// Benchmark sequential against parallel uniform fills across lengths.
fn bench_sequential_vs_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform_fill");
    let generator = Generator::from_seed(42);
    let params = UniformParams::default();

    for n in [10_000, 100_000, 1_000_000, 10_000_000] {
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("sequential", n), &n, |b, &n| {
            b.iter(|| generator.uniform(black_box(n), black_box(params)).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("parallel", n), &n, |b, &n| {
            b.iter(|| {
                generator
                    .uniform_parallel(black_box(n), black_box(params))
                    .unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_per_family_throughput,
    bench_sequential_vs_parallel
);
criterion_main!(benches);
