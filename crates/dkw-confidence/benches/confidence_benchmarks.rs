use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dkw_confidence::{ConfidenceLevel, DkwCi};
use dkw_ecdf::Histogram;
use rand::prelude::*;

/// Generate a histogram with the given support size and random frequencies
fn generate_histogram(support: usize, seed: u64) -> Histogram {
    let mut rng = StdRng::seed_from_u64(seed);
    let pairs: Vec<(f64, i64)> = (0..support)
        .map(|i| (i as f64, rng.gen_range(0..1000)))
        .collect();
    Histogram::from_pairs(pairs).expect("generated pairs are valid")
}

fn bench_histogram_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("Histogram");
    let sizes = [5, 50, 500, 5000];

    for &size in &sizes {
        let pairs: Vec<(f64, i64)> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..size).map(|i| (i as f64, rng.gen_range(0..1000))).collect()
        };

        group.bench_with_input(BenchmarkId::new("from_pairs", size), &pairs, |b, pairs| {
            b.iter(|| Histogram::from_pairs(black_box(pairs.clone())))
        });
    }

    group.finish();
}

fn bench_dkw_interval(c: &mut Criterion) {
    let mut group = c.benchmark_group("DkwInterval");
    let sizes = [5, 50, 500, 5000];

    for &size in &sizes {
        let hist = generate_histogram(size, 42);
        let ci = DkwCi::new(ConfidenceLevel::NINETY_FIVE);

        group.bench_with_input(BenchmarkId::new("interval", size), &hist, |b, hist| {
            b.iter(|| ci.interval(black_box(hist)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_histogram_construction, bench_dkw_interval);
criterion_main!(benches);
