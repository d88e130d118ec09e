//! Unit tests for the emission model.

use rand::Rng;

use crate::config::BaseEmissionMode;
use crate::emissions::calculations::*;
use crate::factors::FactorSet;
use crate::grid::{Cell, CellCategory, CellId, CityGrid};
use crate::sim_rng::SimRng;

// -------------------------------------------------------------------------
// Multiplier chain
// -------------------------------------------------------------------------

#[test]
fn test_all_zero_factors_residential_reduces_to_constants() {
    let factors = FactorSet::uniform(0.0);
    let m = factor_multipliers(CellCategory::Residential, &factors);
    assert_eq!(m, [1.0, 0.5, 1.0, 0.4, 0.7, 0.5, 0.8, 1.2]);

    let emission = emission_from_base(10.0, CellCategory::Residential, &factors);
    let expected = 10.0 * 1.0 * 0.5 * 1.0 * 0.4 * 0.7 * 0.5 * 0.8 * 1.2;
    assert_eq!(emission, expected);
    assert!((emission - 0.672).abs() < 1e-12, "got {emission}");
}

#[test]
fn test_industrial_end_to_end_scenario() {
    let factors = FactorSet {
        green: 0.0,
        building: 100.0,
        water: 0.0,
        vehicles: 100.0,
        industrial: 100.0,
        energy: 100.0,
        congestion: 0.0,
        public_transport: 0.0,
    };
    let base = 50.0;
    let emission = emission_from_base(base, CellCategory::Industrial, &factors);
    // Congestion on a non-transport cell with congestion 0 is 0.8 + 0/200.
    let expected = base * 1.0 * 1.5 * 1.0 * 1.4 * 1.75 * 1.5 * 0.8 * 1.2;
    assert!(
        (emission - expected).abs() < 1e-9,
        "expected {expected}, got {emission}"
    );
}

#[test]
fn test_industrial_branch_only_applies_to_industrial_cells() {
    let factors = FactorSet::uniform(80.0);
    let own = factor_multipliers(CellCategory::Industrial, &factors)[4];
    let spill = factor_multipliers(CellCategory::Commercial, &factors)[4];
    assert!((own - 1.5).abs() < 1e-12);
    assert!((spill - 1.1).abs() < 1e-12);
}

#[test]
fn test_congestion_branch_only_applies_to_transport_cells() {
    let factors = FactorSet::uniform(40.0);
    let own = factor_multipliers(CellCategory::Transport, &factors)[6];
    let spill = factor_multipliers(CellCategory::Residential, &factors)[6];
    assert!((own - 1.0).abs() < 1e-12);
    assert!((spill - 1.0).abs() < 1e-12);

    let factors = FactorSet::uniform(100.0);
    let own = factor_multipliers(CellCategory::Transport, &factors)[6];
    let spill = factor_multipliers(CellCategory::Industrial, &factors)[6];
    assert!((own - 1.6).abs() < 1e-12);
    assert!((spill - 1.3).abs() < 1e-12);
}

#[test]
fn test_more_green_means_less_emission() {
    let low = FactorSet {
        green: 10.0,
        ..FactorSet::default()
    };
    let high = FactorSet {
        green: 90.0,
        ..FactorSet::default()
    };
    let a = emission_from_base(40.0, CellCategory::Commercial, &low);
    let b = emission_from_base(40.0, CellCategory::Commercial, &high);
    assert!(b < a, "green=90 ({b}) should emit less than green=10 ({a})");
}

// -------------------------------------------------------------------------
// Non-negativity
// -------------------------------------------------------------------------

#[test]
fn test_emission_never_negative_for_extreme_factors() {
    let extremes = [-1000.0, -100.0, -1.0, 0.0, 50.0, 100.0, 150.0, 250.0, 1000.0];
    let mut rng = SimRng::from_seed_u64(11);
    for category in CellCategory::ALL {
        for &value in &extremes {
            let factors = FactorSet::uniform(value);
            let e = compute_cell_emission(category, &factors, &mut rng.0);
            assert!(e >= 0.0, "{category} at {value}: {e}");
        }
    }
}

#[test]
fn test_single_negative_multiplier_is_floored_to_zero() {
    // green = 300 makes the first multiplier -0.5 while the rest stay positive.
    let factors = FactorSet {
        green: 300.0,
        ..FactorSet::default()
    };
    assert_eq!(
        emission_from_base(20.0, CellCategory::Residential, &factors),
        0.0
    );
}

#[test]
fn test_nan_factor_is_floored_to_zero() {
    let factors = FactorSet {
        energy: f64::NAN,
        ..FactorSet::default()
    };
    assert_eq!(
        emission_from_base(20.0, CellCategory::Transport, &factors),
        0.0
    );
}

#[test]
fn test_random_factor_sets_are_never_negative() {
    let mut rng = SimRng::from_seed_u64(2024);
    for _ in 0..2000 {
        let factors = FactorSet {
            green: rng.0.gen_range(-500.0..500.0),
            building: rng.0.gen_range(-500.0..500.0),
            water: rng.0.gen_range(-500.0..500.0),
            vehicles: rng.0.gen_range(-500.0..500.0),
            industrial: rng.0.gen_range(-500.0..500.0),
            energy: rng.0.gen_range(-500.0..500.0),
            congestion: rng.0.gen_range(-500.0..500.0),
            public_transport: rng.0.gen_range(-500.0..500.0),
        };
        let category = CellCategory::ALL[rng.0.gen_range(0..4)];
        assert!(compute_cell_emission(category, &factors, &mut rng.0) >= 0.0);
    }
}

// -------------------------------------------------------------------------
// Base draws
// -------------------------------------------------------------------------

#[test]
fn test_base_draws_stay_in_category_range() {
    let mut rng = SimRng::from_seed_u64(77);
    for category in CellCategory::ALL {
        let (low, high) = base_emission_range(category);
        for _ in 0..500 {
            let base = draw_base_emission(category, &mut rng.0);
            assert!(base >= low && base < high, "{category}: {base}");
        }
    }
}

#[test]
fn test_compute_cell_emission_uses_one_base_draw() {
    let factors = FactorSet::default();
    let mut a = SimRng::from_seed_u64(5);
    let mut b = a.clone();
    let e = compute_cell_emission(CellCategory::Industrial, &factors, &mut a.0);
    let base = draw_base_emission(CellCategory::Industrial, &mut b.0);
    assert_eq!(e, emission_from_base(base, CellCategory::Industrial, &factors));
}

// -------------------------------------------------------------------------
// Grid recalculation
// -------------------------------------------------------------------------

fn two_cell_grid() -> CityGrid {
    CityGrid::from_cells(
        2,
        1,
        vec![
            Cell::new(CellId::new(0, 0), CellCategory::Industrial, 60.0),
            Cell::new(CellId::new(1, 0), CellCategory::Residential, 10.0),
        ],
    )
}

#[test]
fn test_fixed_mode_is_repeatable() {
    let factors = FactorSet::default();
    let mut rng = SimRng::from_seed_u64(1);
    let mut grid = two_cell_grid();
    recalculate_grid(&mut grid, &factors, BaseEmissionMode::FixedPerCell, &mut rng.0);
    let first: Vec<f64> = grid.cells().iter().map(|c| c.emission).collect();
    recalculate_grid(&mut grid, &factors, BaseEmissionMode::FixedPerCell, &mut rng.0);
    let second: Vec<f64> = grid.cells().iter().map(|c| c.emission).collect();
    assert_eq!(first, second);
    assert_eq!(
        first[0],
        emission_from_base(60.0, CellCategory::Industrial, &factors)
    );
}

#[test]
fn test_redraw_mode_changes_values_between_calls() {
    let factors = FactorSet::default();
    let mut rng = SimRng::from_seed_u64(1);
    let mut grid = two_cell_grid();
    recalculate_grid(&mut grid, &factors, BaseEmissionMode::RedrawEachRecalc, &mut rng.0);
    let first: Vec<f64> = grid.cells().iter().map(|c| c.emission).collect();
    recalculate_grid(&mut grid, &factors, BaseEmissionMode::RedrawEachRecalc, &mut rng.0);
    let second: Vec<f64> = grid.cells().iter().map(|c| c.emission).collect();
    assert_ne!(first, second);
    // The stored generation-time base is left alone.
    assert_eq!(grid.cells()[0].base_emission, 60.0);
}

#[test]
fn test_recalculation_keeps_categories_and_ids() {
    let mut grid = two_cell_grid();
    let before: Vec<_> = grid.cells().iter().map(|c| (c.id, c.category)).collect();
    recalculate_grid(
        &mut grid,
        &FactorSet::uniform(100.0),
        BaseEmissionMode::RedrawEachRecalc,
        &mut SimRng::default().0,
    );
    let after: Vec<_> = grid.cells().iter().map(|c| (c.id, c.category)).collect();
    assert_eq!(before, after);
}
