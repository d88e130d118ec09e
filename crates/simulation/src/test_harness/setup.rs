//! Builder methods for grid, factor, and projection setup.

use crate::factors::FactorSet;
use crate::grid::CityGrid;
use crate::projection::{GrowthRates, ProjectionState};

use super::TestTwin;

impl TestTwin {
    /// Replace the city grid.
    pub fn with_grid(mut self, grid: CityGrid) -> Self {
        self.app.world_mut().insert_resource(grid);
        self
    }

    /// Replace the factor set without recalculating.
    pub fn with_factors(mut self, factors: FactorSet) -> Self {
        self.app.world_mut().insert_resource(factors);
        self
    }

    pub fn with_growth(mut self, growth: GrowthRates) -> Self {
        self.app
            .world_mut()
            .resource_mut::<ProjectionState>()
            .growth = growth;
        self
    }
}
