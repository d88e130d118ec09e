//! Pure helper functions for the per-cell emission model.

use rand::Rng;

use crate::config::BaseEmissionMode;
use crate::factors::FactorSet;
use crate::grid::{CellCategory, CityGrid};

use super::constants::*;

/// The `[low, high)` range a category's random base emission is drawn from.
pub fn base_emission_range(category: CellCategory) -> (f64, f64) {
    match category {
        CellCategory::Industrial => INDUSTRIAL_BASE,
        CellCategory::Commercial => COMMERCIAL_BASE,
        CellCategory::Transport => TRANSPORT_BASE,
        CellCategory::Residential => RESIDENTIAL_BASE,
    }
}

/// Draw a category-specific random base emission.
pub fn draw_base_emission<R: Rng + ?Sized>(category: CellCategory, rng: &mut R) -> f64 {
    let (low, high) = base_emission_range(category);
    rng.gen_range(low..high)
}

/// The eight factor multipliers in application order:
/// green, building, water, vehicles, industrial, energy, congestion,
/// public transport.
pub fn factor_multipliers(category: CellCategory, factors: &FactorSet) -> [f64; 8] {
    let industrial = if category == CellCategory::Industrial {
        INDUSTRIAL_OWN_OFFSET + factors.industrial / INDUSTRIAL_OWN_DIVISOR
    } else {
        INDUSTRIAL_SPILL_OFFSET + factors.industrial / INDUSTRIAL_SPILL_DIVISOR
    };
    let congestion = if category == CellCategory::Transport {
        CONGESTION_OWN_OFFSET + factors.congestion / CONGESTION_OWN_DIVISOR
    } else {
        CONGESTION_SPILL_OFFSET + factors.congestion / CONGESTION_SPILL_DIVISOR
    };

    [
        1.0 - factors.green / GREEN_DIVISOR,
        BUILDING_OFFSET + factors.building / PERCENT,
        1.0 - factors.water / WATER_DIVISOR,
        VEHICLE_OFFSET + factors.vehicles / PERCENT,
        industrial,
        ENERGY_OFFSET + factors.energy / PERCENT,
        congestion,
        PUBLIC_TRANSPORT_CEILING - factors.public_transport / PUBLIC_TRANSPORT_DIVISOR,
    ]
}

/// Apply the multiplier chain to `base` in order and floor the result at zero.
///
/// `f64::max` also maps a NaN product to zero.
pub fn emission_from_base(base: f64, category: CellCategory, factors: &FactorSet) -> f64 {
    factor_multipliers(category, factors)
        .iter()
        .fold(base, |emission, m| emission * m)
        .max(0.0)
}

/// Draw a fresh base and run it through the multiplier chain.
pub fn compute_cell_emission<R: Rng + ?Sized>(
    category: CellCategory,
    factors: &FactorSet,
    rng: &mut R,
) -> f64 {
    let base = draw_base_emission(category, rng);
    emission_from_base(base, category, factors)
}

/// Recompute every cell's emission from `factors`. Each cell is independent.
pub fn recalculate_grid<R: Rng + ?Sized>(
    grid: &mut CityGrid,
    factors: &FactorSet,
    mode: BaseEmissionMode,
    rng: &mut R,
) {
    for cell in grid.cells_mut() {
        cell.emission = match mode {
            BaseEmissionMode::FixedPerCell => {
                emission_from_base(cell.base_emission, cell.category, factors)
            }
            BaseEmissionMode::RedrawEachRecalc => {
                compute_cell_emission(cell.category, factors, rng)
            }
        };
    }
}
