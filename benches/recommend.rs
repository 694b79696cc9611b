// Query throughput benchmarks over synthetic artifact-sized data
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use propx_core::{DistanceTable, ItemCatalog, Recommender, SquareMatrix};
use rand::prelude::*;

fn random_similarity(n: usize, rng: &mut impl Rng) -> SquareMatrix {
    let rows = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| if i == j { 1.0 } else { rng.random_range(0.0f32..1.0f32) })
                .collect()
        })
        .collect();
    SquareMatrix::from_rows(rows).unwrap()
}

fn build_engine(n: usize) -> Recommender {
    let mut rng = rand::rng();
    let catalog = ItemCatalog::new((0..n).map(|i| format!("property-{i}")).collect()).unwrap();
    let facilities = random_similarity(n, &mut rng);
    let price = random_similarity(n, &mut rng);
    let location = random_similarity(n, &mut rng);
    let distances = DistanceTable::from_columns(
        &catalog,
        vec![(
            "Downtown".to_string(),
            (0..n).map(|_| rng.random_range(100.0f32..20_000.0)).collect(),
        )],
    )
    .unwrap();
    Recommender::new(catalog, facilities, price, location, distances).unwrap()
}

fn benchmark_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend_similar");

    for size in [100, 1000, 4000].iter() {
        let engine = build_engine(*size);
        group.bench_with_input(BenchmarkId::new("top5", size), size, |b, _| {
            b.iter(|| {
                let results = engine.recommend_similar(black_box("property-0"), 5).unwrap();
                black_box(results);
            });
        });
    }

    group.finish();
}

fn benchmark_radius(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_within_radius");

    for size in [100, 1000, 4000].iter() {
        let engine = build_engine(*size);
        group.bench_with_input(BenchmarkId::new("5km", size), size, |b, _| {
            b.iter(|| {
                let results = engine
                    .find_within_radius(black_box("Downtown"), 5000.0)
                    .unwrap();
                black_box(results);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_recommend, benchmark_radius);
criterion_main!(benches);
