//! Intervention suggestions for the highest-emitting cells.

use bevy::prelude::*;
use serde::Serialize;

use crate::config::RECOMMENDATION_COUNT;
use crate::grid::{CellCategory, CellId, CityGrid};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub cell: CellId,
    pub category: CellCategory,
    pub emission: f64,
    pub intervention: &'static str,
    pub explanation: &'static str,
    /// Expected reduction in percent.
    pub reduction: f64,
}

fn suggestion_for(category: CellCategory) -> (&'static str, &'static str, f64) {
    match category {
        CellCategory::Industrial => (
            "Industrial CO2 Capture Unit",
            "High industrial emissions detected. Direct capture at the source is most effective.",
            35.0,
        ),
        CellCategory::Commercial => (
            "Rooftop Garden + Solar",
            "Commercial buildings have large roof areas suitable for combined green and solar.",
            25.0,
        ),
        CellCategory::Transport => (
            "Compact Roadside Capture",
            "Heavy traffic corridor. Roadside capture units filter vehicle exhaust.",
            20.0,
        ),
        CellCategory::Residential => (
            "Vertical Garden Wall",
            "Residential area benefits from natural absorption and improved air quality.",
            15.0,
        ),
    }
}

/// The [`RECOMMENDATION_COUNT`] highest-emitting cells with a positive
/// emission, highest first. Equal emissions keep grid order.
pub fn generate_recommendations(grid: &CityGrid) -> Vec<Recommendation> {
    let mut ranked: Vec<_> = grid.cells().iter().filter(|c| c.emission > 0.0).collect();
    ranked.sort_by(|a, b| b.emission.total_cmp(&a.emission));
    ranked
        .into_iter()
        .take(RECOMMENDATION_COUNT)
        .map(|cell| {
            let (intervention, explanation, reduction) = suggestion_for(cell.category);
            Recommendation {
                cell: cell.id,
                category: cell.category,
                emission: cell.emission,
                intervention,
                explanation,
                reduction,
            }
        })
        .collect()
}

#[derive(Resource, Debug, Clone, Default)]
pub struct Recommendations {
    pub items: Vec<Recommendation>,
}

impl Recommendations {
    pub fn refresh(&mut self, grid: &CityGrid) {
        self.items = generate_recommendations(grid);
    }
}
