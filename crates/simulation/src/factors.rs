//! The eight global urban factors that drive the emission model.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Eight percentages (nominally 0-100) describing exogenous urban conditions.
///
/// Values outside 0-100 are accepted and propagate algebraically through the
/// emission model; the dashboard sliders keep them in range.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorSet {
    pub green: f64,
    pub building: f64,
    pub water: f64,
    pub vehicles: f64,
    pub industrial: f64,
    pub energy: f64,
    pub congestion: f64,
    pub public_transport: f64,
}

impl Default for FactorSet {
    fn default() -> Self {
        Self {
            green: 30.0,
            building: 60.0,
            water: 15.0,
            vehicles: 70.0,
            industrial: 50.0,
            energy: 65.0,
            congestion: 55.0,
            public_transport: 40.0,
        }
    }
}

impl FactorSet {
    /// Every factor at the same value.
    pub fn uniform(value: f64) -> Self {
        Self {
            green: value,
            building: value,
            water: value,
            vehicles: value,
            industrial: value,
            energy: value,
            congestion: value,
            public_transport: value,
        }
    }

    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Green => self.green,
            Factor::Building => self.building,
            Factor::Water => self.water,
            Factor::Vehicles => self.vehicles,
            Factor::Industrial => self.industrial,
            Factor::Energy => self.energy,
            Factor::Congestion => self.congestion,
            Factor::PublicTransport => self.public_transport,
        }
    }

    pub fn set(&mut self, factor: Factor, value: f64) {
        let slot = match factor {
            Factor::Green => &mut self.green,
            Factor::Building => &mut self.building,
            Factor::Water => &mut self.water,
            Factor::Vehicles => &mut self.vehicles,
            Factor::Industrial => &mut self.industrial,
            Factor::Energy => &mut self.energy,
            Factor::Congestion => &mut self.congestion,
            Factor::PublicTransport => &mut self.public_transport,
        };
        *slot = value;
    }
}

/// Identifies one slider of the factor set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Factor {
    Green,
    Building,
    Water,
    Vehicles,
    Industrial,
    Energy,
    Congestion,
    PublicTransport,
}

impl Factor {
    pub const ALL: [Factor; 8] = [
        Factor::Green,
        Factor::Building,
        Factor::Water,
        Factor::Vehicles,
        Factor::Industrial,
        Factor::Energy,
        Factor::Congestion,
        Factor::PublicTransport,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Factor::Green => "Green Areas",
            Factor::Building => "Building Density",
            Factor::Water => "Water Bodies",
            Factor::Vehicles => "Vehicles",
            Factor::Industrial => "Industrial Activity",
            Factor::Energy => "Energy Consumption",
            Factor::Congestion => "Traffic Congestion",
            Factor::PublicTransport => "Public Transport",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_dashboard_start_values() {
        let f = FactorSet::default();
        assert_eq!(
            Factor::ALL.map(|k| f.get(k)),
            [30.0, 60.0, 15.0, 70.0, 50.0, 65.0, 55.0, 40.0]
        );
    }

    #[test]
    fn test_set_then_get_each_factor() {
        let mut f = FactorSet::uniform(0.0);
        for (i, factor) in Factor::ALL.into_iter().enumerate() {
            f.set(factor, i as f64 * 10.0);
        }
        for (i, factor) in Factor::ALL.into_iter().enumerate() {
            assert_eq!(f.get(factor), i as f64 * 10.0, "{:?}", factor);
        }
    }

    #[test]
    fn test_set_only_touches_one_field() {
        let mut f = FactorSet::default();
        f.set(Factor::Congestion, 95.0);
        let expected = FactorSet {
            congestion: 95.0,
            ..FactorSet::default()
        };
        assert_eq!(f, expected);
    }
}
