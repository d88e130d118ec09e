use serde::Serialize;

use crate::grid::CellCategory;

use super::constants::{POPULATION_SHARE_WEIGHT, POPULATION_SPLIT};
use super::state::{GrowthFactor, GrowthRates, ProjectionPoint};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ProjectionSummary {
    pub final_year_emission: f64,
    /// Mean yearly growth relative to the start emission, in percent.
    pub average_growth_rate: f64,
    /// `None` only for an empty projection.
    pub dominant_sector: Option<CellCategory>,
    pub confidence_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SectorShare {
    pub sector: CellCategory,
    pub emission: f64,
}

/// Sector with the largest growth rate. Ties keep the earlier of industrial,
/// residential, commercial, transport (vehicle growth).
pub fn dominant_sector(rates: &GrowthRates) -> CellCategory {
    let candidates = [
        (CellCategory::Industrial, rates.industrial),
        (CellCategory::Residential, rates.residential),
        (CellCategory::Commercial, rates.commercial),
        (CellCategory::Transport, rates.vehicle),
    ];
    candidates
        .into_iter()
        .reduce(|best, next| if next.1 > best.1 { next } else { best })
        .map_or(CellCategory::Industrial, |(sector, _)| sector)
}

/// `100 - 2 * (max rate - min rate)`, clamped to 0..=100.
pub fn confidence_score(rates: &GrowthRates) -> f64 {
    let values = GrowthFactor::ALL.map(|f| rates.get(f));
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    (100.0 - 2.0 * (max - min)).clamp(0.0, 100.0)
}

pub fn summarize(points: &[ProjectionPoint], start: f64, rates: &GrowthRates) -> ProjectionSummary {
    let Some(last) = points.last() else {
        return ProjectionSummary::default();
    };
    let average_growth_rate = if start == 0.0 {
        0.0
    } else {
        (last.emission - start) / start * 100.0 / points.len() as f64
    };
    ProjectionSummary {
        final_year_emission: last.emission,
        average_growth_rate,
        dominant_sector: Some(dominant_sector(rates)),
        confidence_score: confidence_score(rates),
    }
}

/// Split `final_emission` across industrial, residential, commercial and
/// transport in proportion to their growth rates, with half the population
/// rate distributed 20/30/30/20. All-zero rates split evenly.
pub fn sector_shares(final_emission: f64, rates: &GrowthRates) -> [SectorShare; 4] {
    let sectors = [
        CellCategory::Industrial,
        CellCategory::Residential,
        CellCategory::Commercial,
        CellCategory::Transport,
    ];
    let own = [
        rates.industrial,
        rates.residential,
        rates.commercial,
        rates.vehicle,
    ];
    let population = rates.population * POPULATION_SHARE_WEIGHT;
    let total: f64 = own.iter().sum::<f64>() + population;

    if total == 0.0 {
        return sectors.map(|sector| SectorShare {
            sector,
            emission: final_emission * 0.25,
        });
    }

    let weights: [f64; 4] =
        std::array::from_fn(|i| own[i] / total + population / total * POPULATION_SPLIT[i]);
    let sum: f64 = weights.iter().sum();

    std::array::from_fn(|i| SectorShare {
        sector: sectors[i],
        emission: final_emission * weights[i] / sum,
    })
}
