//! Benchmarks для поиска станций в радиусе.
//!
//! Запуск: `cargo bench -p stationhub-benchmark --bench radius_benchmark`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stationhub::{
    database::{great_circle_distance, haversine_distance, GeoPoint},
    find_within_radius, RadiusQuery,
};
use stationhub_benchmark::store_with_stations;

fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance");
    let london = GeoPoint::new(51.5074, -0.1278);
    let paris = GeoPoint::new(48.8566, 2.3522);

    group.bench_function("law_of_cosines", |b| {
        b.iter(|| great_circle_distance(black_box(london), black_box(paris)))
    });
    group.bench_function("haversine", |b| {
        b.iter(|| haversine_distance(black_box(london), black_box(paris)))
    });
    group.finish();
}

fn bench_radius_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("radius_search");

    for size in [100, 1_000, 10_000] {
        let Ok(store) = store_with_stations(size) else {
            continue;
        };
        group.throughput(Throughput::Elements(size as u64));

        for radius_km in [50.0, 2_000.0, 20_100.0] {
            let query = RadiusQuery {
                latitude: 40.0,
                longitude: -75.0,
                radius_km,
            };
            group.bench_with_input(
                BenchmarkId::new(format!("r={radius_km}"), size),
                &query,
                |b, query| b.iter(|| black_box(find_within_radius(&store, query))),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_distance, bench_radius_search);
criterion_main!(benches);
