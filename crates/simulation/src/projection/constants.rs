/// Symmetric noise spread applied to each growth factor's rate.
pub const POPULATION_NOISE: f64 = 0.5;
pub const VEHICLE_NOISE: f64 = 0.4;
pub const INDUSTRIAL_NOISE: f64 = 0.6;
pub const RESIDENTIAL_NOISE: f64 = 0.3;
pub const COMMERCIAL_NOISE: f64 = 0.3;

/// Upper slider bound per growth factor, in percent. The lower bound is 0.
pub const POPULATION_MAX_RATE: f64 = 10.0;
pub const VEHICLE_MAX_RATE: f64 = 15.0;
pub const INDUSTRIAL_MAX_RATE: f64 = 20.0;
pub const RESIDENTIAL_MAX_RATE: f64 = 10.0;
pub const COMMERCIAL_MAX_RATE: f64 = 10.0;

/// Weight of population growth when splitting the final emission by sector.
pub const POPULATION_SHARE_WEIGHT: f64 = 0.5;

/// How the population share is spread over industrial, residential,
/// commercial and transport.
pub const POPULATION_SPLIT: [f64; 4] = [0.2, 0.3, 0.3, 0.2];
