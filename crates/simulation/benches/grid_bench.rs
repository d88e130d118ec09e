//! Criterion benchmarks for grid operations.
//!
//! Benchmarks:
//!   - 12x12 grid generation
//!   - full-grid recalculation, fixed and redrawn bases
//!   - KPI aggregation with a populated ledger
//!   - recommendation ranking
//!
//! Run with: cargo bench -p simulation --bench grid_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use simulation::config::BaseEmissionMode;
use simulation::emissions::recalculate_grid;
use simulation::factors::FactorSet;
use simulation::grid::{CellCategory, CityGrid};
use simulation::interventions::{InterventionId, InterventionLedger};
use simulation::kpi::CityKpis;
use simulation::recommendations::generate_recommendations;

fn seeded_grid() -> CityGrid {
    CityGrid::generate_default(&mut ChaCha8Rng::seed_from_u64(42))
}

// ---------------------------------------------------------------------------
// Benchmark: generation and recalculation
// ---------------------------------------------------------------------------

fn bench_recalculate(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_recalculate");
    let factors = FactorSet::default();

    group.bench_function("generate_12x12", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        b.iter(|| black_box(CityGrid::generate_default(&mut rng)));
    });

    for (name, mode) in [
        ("fixed_base", BaseEmissionMode::FixedPerCell),
        ("redraw_base", BaseEmissionMode::RedrawEachRecalc),
    ] {
        let mut grid = seeded_grid();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        group.bench_function(name, |b| {
            b.iter(|| recalculate_grid(&mut grid, black_box(&factors), mode, &mut rng));
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: aggregation
// ---------------------------------------------------------------------------

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_aggregation");
    let grid = seeded_grid();

    // One suitable intervention on every cell.
    let mut ledger = InterventionLedger::default();
    for cell in grid.cells() {
        let intervention = match cell.category {
            CellCategory::Transport => InterventionId::CaptureUnit2,
            _ => InterventionId::VerticalGarden2,
        };
        let _ = ledger.place(&grid, cell.id, intervention);
    }

    group.bench_function("kpis_144_placements", |b| {
        b.iter(|| black_box(CityKpis::compute(black_box(&grid), black_box(&ledger))));
    });

    group.bench_function("recommendations", |b| {
        b.iter(|| black_box(generate_recommendations(black_box(&grid))));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Register groups
// ---------------------------------------------------------------------------

criterion_group!(benches, bench_recalculate, bench_aggregation);
criterion_main!(benches);
