//! Benchmarks for brute-force vector search

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vectordb_server::{Collection, DistanceMetric};

fn random_vector(dim: usize) -> Vec<f32> {
    (0..dim).map(|_| rand::random::<f32>()).collect()
}

fn benchmark_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [100, 1000, 10000].iter() {
        let col = Collection::new("bench", 128, DistanceMetric::Cosine).unwrap();
        for i in 0..*size {
            col.upsert(&format!("v{}", i), &random_vector(128), None)
                .unwrap();
        }

        let query = vec![0.5; 128];

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                col.search(black_box(&query), black_box(10), false, false)
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_search);
criterion_main!(benches);
