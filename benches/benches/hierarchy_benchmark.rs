//! Benchmarks для обхода дерева компаний и сбора станций.
//!
//! Запуск: `cargo bench -p stationhub-benchmark --bench hierarchy_benchmark`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use stationhub::{resolve_descendants, stations_for_company_tree};
use stationhub_benchmark::{company_chain, company_tree};

fn bench_wide_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide_tree");

    for (fanout, depth) in [(4, 3), (4, 5), (10, 3)] {
        let Ok((store, root)) = company_tree(fanout, depth) else {
            continue;
        };
        let label = format!("{fanout}x{depth}");

        group.bench_with_input(BenchmarkId::new("resolve_descendants", &label), &root, |b, root| {
            b.iter(|| black_box(resolve_descendants(&store, *root)))
        });
        group.bench_with_input(BenchmarkId::new("stations_for_tree", &label), &root, |b, root| {
            b.iter(|| black_box(stations_for_company_tree(&store, *root)))
        });
    }
    group.finish();
}

fn bench_deep_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_chain");

    for len in [100, 1_000, 5_000] {
        let Ok((store, root)) = company_chain(len) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::from_parameter(len), &root, |b, root| {
            b.iter(|| black_box(resolve_descendants(&store, *root)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_wide_tree, bench_deep_chain);
criterion_main!(benches);
