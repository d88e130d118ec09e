use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub const GRID_WIDTH: usize = 12;
pub const GRID_HEIGHT: usize = 12;
pub const GRID_CELLS: usize = GRID_WIDTH * GRID_HEIGHT;

/// A cell whose post-intervention emission exceeds this value is a hotspot.
pub const HOTSPOT_THRESHOLD: f64 = 30.0;

/// Monte Carlo trials averaged for every projected year.
pub const TRIALS_PER_YEAR: u32 = 500;

/// Inclusive bounds for the projection horizon, in years.
pub const MIN_PROJECTION_YEARS: u32 = 1;
pub const MAX_PROJECTION_YEARS: u32 = 20;
pub const DEFAULT_PROJECTION_YEARS: u32 = 5;

/// Delay between "apply factors" and the deferred recalculation.
pub const RECALC_DELAY_SECS: f32 = 1.0;

/// Number of top-emitting cells that receive a recommendation.
pub const RECOMMENDATION_COUNT: usize = 4;

pub const GEOCODE_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
pub const GEOCODE_USER_AGENT: &str = "CO2-Capture-Digital-Twin/1.0";

/// Default seed used when no explicit seed is provided.
pub const DEFAULT_SEED: u64 = 42;

/// How the per-cell random base emission behaves across recalculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BaseEmissionMode {
    /// The base is drawn once when the grid is generated and reused by every
    /// recalculation, so identical factors always give identical emissions.
    #[default]
    FixedPerCell,
    /// A fresh base is drawn for every cell on every recalculation.
    RedrawEachRecalc,
}

/// Run-time configuration. Insert before `SimulationPlugin` to override the
/// defaults; the plugin only initializes it when absent.
#[derive(Resource, Debug, Clone, Default)]
pub struct SimulationConfig {
    /// RNG seed. `None` keeps `DEFAULT_SEED`.
    pub seed: Option<u64>,
    pub base_mode: BaseEmissionMode,
}

impl SimulationConfig {
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }
}

/// Calendar year the projection counts from (its first entry is the year after).
pub fn current_calendar_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}
