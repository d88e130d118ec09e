use std::fmt;

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{GRID_HEIGHT, GRID_WIDTH};
use crate::emissions::draw_base_emission;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellCategory {
    Residential,
    Industrial,
    Commercial,
    Transport,
}

impl CellCategory {
    pub const ALL: [CellCategory; 4] = [
        CellCategory::Residential,
        CellCategory::Industrial,
        CellCategory::Commercial,
        CellCategory::Transport,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CellCategory::Residential => "residential",
            CellCategory::Industrial => "industrial",
            CellCategory::Commercial => "commercial",
            CellCategory::Transport => "transport",
        }
    }
}

impl fmt::Display for CellCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Grid coordinates of a cell. Displays as `x-y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId {
    pub x: u32,
    pub y: u32,
}

impl CellId {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub id: CellId,
    pub category: CellCategory,
    /// Random base drawn at generation time. Reused by recalculation when the
    /// base mode is `FixedPerCell`.
    pub base_emission: f64,
    /// Current emission before interventions. Always >= 0.
    pub emission: f64,
}

impl Cell {
    pub fn new(id: CellId, category: CellCategory, base_emission: f64) -> Self {
        let base_emission = base_emission.max(0.0);
        Self {
            id,
            category,
            base_emission,
            emission: base_emission,
        }
    }
}

/// The authoritative list of city cells, stored row-major.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CityGrid {
    pub width: usize,
    pub height: usize,
    cells: Vec<Cell>,
}

impl Default for CityGrid {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        }
    }
}

impl CityGrid {
    /// Build a grid from explicit cells. `cells` must be row-major and hold
    /// exactly `width * height` entries whose ids match their position.
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height, "cell count mismatch");
        Self {
            width,
            height,
            cells,
        }
    }

    /// Generate a `width` x `height` grid with a uniformly random category per
    /// cell and a category-specific random base emission.
    pub fn generate<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let category = CellCategory::ALL[rng.gen_range(0..CellCategory::ALL.len())];
                let base = draw_base_emission(category, rng);
                cells.push(Cell::new(CellId::new(x as u32, y as u32), category, base));
            }
        }
        Self::from_cells(width, height, cells)
    }

    /// Generate the standard 12x12 city.
    pub fn generate_default<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::generate(GRID_WIDTH, GRID_HEIGHT, rng)
    }

    #[inline]
    pub fn in_bounds(&self, id: CellId) -> bool {
        (id.x as usize) < self.width && (id.y as usize) < self.height
    }

    #[inline]
    fn index(&self, id: CellId) -> Option<usize> {
        self.in_bounds(id)
            .then(|| id.y as usize * self.width + id.x as usize)
    }

    pub fn get(&self, id: CellId) -> Option<&Cell> {
        self.index(id).and_then(|i| self.cells.get(i))
    }

    pub fn get_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.index(id).and_then(move |i| self.cells.get_mut(i))
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Sum of pre-intervention emissions.
    pub fn total_emission(&self) -> f64 {
        self.cells.iter().map(|c| c.emission).sum()
    }

    /// Emissions laid out as `rows[y][x]` for the heat-map.
    pub fn emission_rows(&self) -> Vec<Vec<f64>> {
        self.cells
            .chunks(self.width.max(1))
            .map(|row| row.iter().map(|c| c.emission).collect())
            .collect()
    }
}
