//! Intervention catalog and the ledger of placed interventions.
//!
//! The catalog is static reference data. A placement copies the catalog
//! efficiency at the moment it is made, so the ledger stays the source of
//! truth for every post-intervention figure.

use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::game_actions::ActionError;
use crate::grid::{CellCategory, CellId, CityGrid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterventionKind {
    CaptureUnit,
    VerticalGarden,
    SolarPanel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterventionId {
    #[serde(rename = "capture_unit_1")]
    CaptureUnit1,
    #[serde(rename = "capture_unit_2")]
    CaptureUnit2,
    #[serde(rename = "vertical_garden_1")]
    VerticalGarden1,
    #[serde(rename = "vertical_garden_2")]
    VerticalGarden2,
    #[serde(rename = "solar_panel_1")]
    SolarPanel1,
}

impl InterventionId {
    pub const ALL: [InterventionId; 5] = [
        InterventionId::CaptureUnit1,
        InterventionId::CaptureUnit2,
        InterventionId::VerticalGarden1,
        InterventionId::VerticalGarden2,
        InterventionId::SolarPanel1,
    ];

    /// Stable string key.
    pub fn key(self) -> &'static str {
        match self {
            InterventionId::CaptureUnit1 => "capture_unit_1",
            InterventionId::CaptureUnit2 => "capture_unit_2",
            InterventionId::VerticalGarden1 => "vertical_garden_1",
            InterventionId::VerticalGarden2 => "vertical_garden_2",
            InterventionId::SolarPanel1 => "solar_panel_1",
        }
    }

    /// The catalog entry for this id.
    pub fn entry(self) -> &'static InterventionType {
        match self {
            InterventionId::CaptureUnit1 => &CATALOG[0],
            InterventionId::CaptureUnit2 => &CATALOG[1],
            InterventionId::VerticalGarden1 => &CATALOG[2],
            InterventionId::VerticalGarden2 => &CATALOG[3],
            InterventionId::SolarPanel1 => &CATALOG[4],
        }
    }
}

impl fmt::Display for InterventionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct InterventionType {
    pub id: InterventionId,
    pub name: &'static str,
    pub kind: InterventionKind,
    /// Emission reduction in percent.
    pub efficiency: f64,
    /// Cost per unit in dollars.
    pub cost: f64,
    pub description: &'static str,
    pub suitable_for: &'static [CellCategory],
}

impl InterventionType {
    pub fn is_suitable_for(&self, category: CellCategory) -> bool {
        self.suitable_for.contains(&category)
    }
}

pub const CATALOG: [InterventionType; 5] = [
    InterventionType {
        id: InterventionId::CaptureUnit1,
        name: "Industrial CO2 Capture Unit",
        kind: InterventionKind::CaptureUnit,
        efficiency: 35.0,
        cost: 50_000.0,
        description: "High-capacity capture system for industrial emissions",
        suitable_for: &[CellCategory::Industrial, CellCategory::Commercial],
    },
    InterventionType {
        id: InterventionId::CaptureUnit2,
        name: "Compact Capture System",
        kind: InterventionKind::CaptureUnit,
        efficiency: 20.0,
        cost: 25_000.0,
        description: "Smaller capture unit for moderate emission sources",
        suitable_for: &[CellCategory::Commercial, CellCategory::Transport],
    },
    InterventionType {
        id: InterventionId::VerticalGarden1,
        name: "Vertical Garden Wall",
        kind: InterventionKind::VerticalGarden,
        efficiency: 15.0,
        cost: 8_000.0,
        description: "Living wall system that absorbs CO2 naturally",
        suitable_for: &[CellCategory::Residential, CellCategory::Commercial],
    },
    InterventionType {
        id: InterventionId::VerticalGarden2,
        name: "Rooftop Garden System",
        kind: InterventionKind::VerticalGarden,
        efficiency: 25.0,
        cost: 15_000.0,
        description: "Extensive rooftop vegetation for CO2 absorption",
        suitable_for: &[
            CellCategory::Residential,
            CellCategory::Commercial,
            CellCategory::Industrial,
        ],
    },
    InterventionType {
        id: InterventionId::SolarPanel1,
        name: "Solar Panel Array",
        kind: InterventionKind::SolarPanel,
        efficiency: 12.0,
        cost: 12_000.0,
        description: "Reduces emissions by replacing grid electricity",
        suitable_for: &[
            CellCategory::Residential,
            CellCategory::Commercial,
            CellCategory::Industrial,
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlacementId(pub u32);

impl fmt::Display for PlacementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An intervention applied to a cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub id: PlacementId,
    pub cell: CellId,
    pub intervention: InterventionId,
    /// Efficiency copied from the catalog when the placement was made.
    pub efficiency: f64,
}

/// All placements, in the order they were made.
#[derive(Resource, Debug, Clone, Default)]
pub struct InterventionLedger {
    placements: Vec<Placement>,
    next_id: u32,
}

impl InterventionLedger {
    /// Place `intervention` on `cell` after checking the cell exists and its
    /// category is in the catalog entry's suitability set.
    pub fn place(
        &mut self,
        grid: &CityGrid,
        cell: CellId,
        intervention: InterventionId,
    ) -> Result<PlacementId, ActionError> {
        let target = grid.get(cell).ok_or(ActionError::OutOfBounds)?;
        let entry = intervention.entry();
        if !entry.is_suitable_for(target.category) {
            return Err(ActionError::NotSuitable {
                intervention,
                category: target.category,
            });
        }
        Ok(self.insert(cell, intervention, entry.efficiency))
    }

    /// Record a placement without validation.
    pub fn insert(&mut self, cell: CellId, intervention: InterventionId, efficiency: f64) -> PlacementId {
        let id = PlacementId(self.next_id);
        self.next_id += 1;
        self.placements.push(Placement {
            id,
            cell,
            intervention,
            efficiency,
        });
        id
    }

    pub fn remove(&mut self, id: PlacementId) -> Option<Placement> {
        let index = self.placements.iter().position(|p| p.id == id)?;
        Some(self.placements.remove(index))
    }

    pub fn get(&self, id: PlacementId) -> Option<&Placement> {
        self.placements.iter().find(|p| p.id == id)
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn for_cell(&self, cell: CellId) -> impl Iterator<Item = &Placement> {
        self.placements.iter().filter(move |p| p.cell == cell)
    }

    /// Combined reduction fraction for a cell (sum of efficiencies / 100).
    pub fn reduction_fraction(&self, cell: CellId) -> f64 {
        self.for_cell(cell).map(|p| p.efficiency / 100.0).sum()
    }

    /// Sum of catalog costs across all placements.
    pub fn total_cost(&self) -> f64 {
        self.placements
            .iter()
            .map(|p| p.intervention.entry().cost)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Emission after applying a reduction fraction, floored at zero.
pub fn apply_reduction(emission: f64, reduction_fraction: f64) -> f64 {
    (emission * (1.0 - reduction_fraction)).max(0.0)
}
