use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PROJECTION_YEARS;

use super::constants::*;
use super::summary::{sector_shares, summarize, ProjectionSummary, SectorShare};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrowthFactor {
    Population,
    Vehicle,
    Industrial,
    Residential,
    Commercial,
}

impl GrowthFactor {
    /// Trial application order.
    pub const ALL: [GrowthFactor; 5] = [
        GrowthFactor::Population,
        GrowthFactor::Vehicle,
        GrowthFactor::Industrial,
        GrowthFactor::Residential,
        GrowthFactor::Commercial,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GrowthFactor::Population => "Population Growth",
            GrowthFactor::Vehicle => "Vehicle Growth",
            GrowthFactor::Industrial => "Industrial Growth",
            GrowthFactor::Residential => "Residential Growth",
            GrowthFactor::Commercial => "Commercial Growth",
        }
    }

    pub fn noise_spread(self) -> f64 {
        match self {
            GrowthFactor::Population => POPULATION_NOISE,
            GrowthFactor::Vehicle => VEHICLE_NOISE,
            GrowthFactor::Industrial => INDUSTRIAL_NOISE,
            GrowthFactor::Residential => RESIDENTIAL_NOISE,
            GrowthFactor::Commercial => COMMERCIAL_NOISE,
        }
    }

    /// Upper bound of the dashboard slider.
    pub fn max_rate(self) -> f64 {
        match self {
            GrowthFactor::Population => POPULATION_MAX_RATE,
            GrowthFactor::Vehicle => VEHICLE_MAX_RATE,
            GrowthFactor::Industrial => INDUSTRIAL_MAX_RATE,
            GrowthFactor::Residential => RESIDENTIAL_MAX_RATE,
            GrowthFactor::Commercial => COMMERCIAL_MAX_RATE,
        }
    }
}

impl fmt::Display for GrowthFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Annual growth rates in percent. Not clamped here; the sliders enforce
/// their ranges.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GrowthRates {
    pub population: f64,
    pub vehicle: f64,
    pub industrial: f64,
    pub residential: f64,
    pub commercial: f64,
}

impl GrowthRates {
    pub fn uniform(rate: f64) -> Self {
        Self {
            population: rate,
            vehicle: rate,
            industrial: rate,
            residential: rate,
            commercial: rate,
        }
    }

    pub fn get(&self, factor: GrowthFactor) -> f64 {
        match factor {
            GrowthFactor::Population => self.population,
            GrowthFactor::Vehicle => self.vehicle,
            GrowthFactor::Industrial => self.industrial,
            GrowthFactor::Residential => self.residential,
            GrowthFactor::Commercial => self.commercial,
        }
    }

    pub fn set(&mut self, factor: GrowthFactor, rate: f64) {
        match factor {
            GrowthFactor::Population => self.population = rate,
            GrowthFactor::Vehicle => self.vehicle = rate,
            GrowthFactor::Industrial => self.industrial = rate,
            GrowthFactor::Residential => self.residential = rate,
            GrowthFactor::Commercial => self.commercial = rate,
        }
    }
}

/// Mean emission for one projected calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub year: i32,
    pub emission: f64,
}

/// Projection inputs edited by the dashboard plus the last result.
#[derive(Resource, Debug, Clone)]
pub struct ProjectionState {
    pub growth: GrowthRates,
    pub years: u32,
    /// Emission the last run started from.
    pub start_emission: f64,
    /// Growth rates the last run used.
    pub result_growth: GrowthRates,
    pub results: Vec<ProjectionPoint>,
}

impl ProjectionState {
    /// Summary of the last run.
    pub fn summary(&self) -> ProjectionSummary {
        summarize(&self.results, self.start_emission, &self.result_growth)
    }

    /// Sector split of the last run's final year. Empty before any run.
    pub fn sector_shares(&self) -> Option<[SectorShare; 4]> {
        let last = self.results.last()?;
        Some(sector_shares(last.emission, &self.result_growth))
    }
}

impl Default for ProjectionState {
    fn default() -> Self {
        Self {
            growth: GrowthRates::default(),
            years: DEFAULT_PROJECTION_YEARS,
            start_emission: 0.0,
            result_growth: GrowthRates::default(),
            results: Vec::new(),
        }
    }
}
