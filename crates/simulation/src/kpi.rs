//! Key performance indicators derived from the grid and the placement ledger.

use bevy::prelude::*;
use serde::Serialize;

use crate::config::HOTSPOT_THRESHOLD;
use crate::grid::{Cell, CellCategory, CityGrid};
use crate::interventions::{apply_reduction, InterventionLedger};

/// One KPI reading.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct KpiSnapshot {
    /// Tons of CO2 per year.
    pub total_emissions: f64,
    /// Reduction against the raw grid emission, in percent.
    pub emission_reduction: f64,
    /// Mean efficiency of placed interventions, in percent.
    pub intervention_efficiency: f64,
    /// Dollars per ton reduced. Zero when nothing was reduced.
    pub cost_effectiveness: f64,
    /// Tons reduced.
    pub projected_savings: f64,
    pub hotspot_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub category: CellCategory,
    pub baseline: f64,
    pub current: f64,
}

/// Post-intervention emission of a single cell.
pub fn cell_current_emission(cell: &Cell, ledger: &InterventionLedger) -> f64 {
    apply_reduction(cell.emission, ledger.reduction_fraction(cell.id))
}

/// KPIs with every placed intervention applied.
pub fn current_kpis(grid: &CityGrid, ledger: &InterventionLedger) -> KpiSnapshot {
    let mut base_total = 0.0;
    let mut current_total = 0.0;
    let mut hotspot_count = 0;

    for cell in grid.cells() {
        let current = cell_current_emission(cell, ledger);
        base_total += cell.emission;
        current_total += current;
        if current > HOTSPOT_THRESHOLD {
            hotspot_count += 1;
        }
    }

    let reduction = base_total - current_total;
    let emission_reduction = if base_total > 0.0 {
        reduction / base_total * 100.0
    } else {
        0.0
    };

    let intervention_efficiency = if ledger.is_empty() {
        0.0
    } else {
        ledger.placements().iter().map(|p| p.efficiency).sum::<f64>() / ledger.len() as f64
    };

    let cost_effectiveness = if reduction > 0.0 {
        ledger.total_cost() / reduction
    } else {
        0.0
    };

    KpiSnapshot {
        total_emissions: current_total,
        emission_reduction,
        intervention_efficiency,
        cost_effectiveness,
        projected_savings: reduction,
        hotspot_count,
    }
}

/// KPIs of the raw grid, as if nothing had been placed.
pub fn baseline_kpis(grid: &CityGrid) -> KpiSnapshot {
    KpiSnapshot {
        total_emissions: grid.total_emission(),
        hotspot_count: grid
            .cells()
            .iter()
            .filter(|c| c.emission > HOTSPOT_THRESHOLD)
            .count() as u32,
        ..Default::default()
    }
}

/// Relative change of `current` against `baseline`, in percent.
pub fn percent_change(current: f64, baseline: f64) -> f64 {
    if baseline == 0.0 {
        0.0
    } else {
        (current - baseline) / baseline * 100.0
    }
}

pub fn emissions_by_category(grid: &CityGrid, ledger: &InterventionLedger) -> Vec<CategoryBreakdown> {
    CellCategory::ALL
        .iter()
        .map(|&category| {
            let (baseline, current) = grid
                .cells()
                .iter()
                .filter(|c| c.category == category)
                .fold((0.0, 0.0), |(b, c), cell| {
                    (b + cell.emission, c + cell_current_emission(cell, ledger))
                });
            CategoryBreakdown {
                category,
                baseline,
                current,
            }
        })
        .collect()
}

/// Cached KPI readings for the dashboard.
#[derive(Resource, Debug, Clone, Default)]
pub struct CityKpis {
    pub current: KpiSnapshot,
    pub baseline: KpiSnapshot,
    pub by_category: Vec<CategoryBreakdown>,
}

impl CityKpis {
    pub fn compute(grid: &CityGrid, ledger: &InterventionLedger) -> Self {
        Self {
            current: current_kpis(grid, ledger),
            baseline: baseline_kpis(grid),
            by_category: emissions_by_category(grid, ledger),
        }
    }
}

/// Recomputes [`CityKpis`] whenever the grid or the ledger changed.
pub fn refresh_kpis(
    grid: Res<CityGrid>,
    ledger: Res<InterventionLedger>,
    mut kpis: ResMut<CityKpis>,
) {
    if !grid.is_changed() && !ledger.is_changed() {
        return;
    }
    *kpis = CityKpis::compute(&grid, &ledger);
}
