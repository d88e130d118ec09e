//! Criterion benchmark: Monte Carlo projection.
//!
//! Each projected year runs 500 trials, so a 20-year horizon is 10 000
//! trials of five perturbations each.
//!
//! Run with: cargo bench -p simulation --bench projection_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use simulation::projection::{run_projection, sector_shares, summarize, GrowthRates};

fn bench_run_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");
    let rates = GrowthRates {
        population: 2.0,
        vehicle: 3.0,
        industrial: 5.0,
        residential: 1.5,
        commercial: 2.5,
    };

    for years in [1u32, 5, 20] {
        group.bench_with_input(BenchmarkId::new("run", years), &years, |b, &years| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            b.iter(|| black_box(run_projection(black_box(4000.0), &rates, years, 2026, &mut rng)));
        });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let points = run_projection(4000.0, &rates, 20, 2026, &mut rng);
    group.bench_function("summary_and_shares", |b| {
        b.iter(|| {
            let summary = summarize(black_box(&points), 4000.0, &rates);
            black_box(sector_shares(summary.final_year_emission, &rates))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_run_projection);
criterion_main!(benches);
