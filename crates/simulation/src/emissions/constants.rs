//! Base-emission ranges and multiplier coefficients for the cell emission model.

/// Uniform base-emission range per category, `[low, high)`.
pub const INDUSTRIAL_BASE: (f64, f64) = (30.0, 90.0);
pub const COMMERCIAL_BASE: (f64, f64) = (20.0, 60.0);
pub const TRANSPORT_BASE: (f64, f64) = (15.0, 50.0);
pub const RESIDENTIAL_BASE: (f64, f64) = (5.0, 30.0);

/// Green coverage: `1 - green / GREEN_DIVISOR`.
pub(crate) const GREEN_DIVISOR: f64 = 200.0;

/// Building density: `0.5 + building / 100`.
pub(crate) const BUILDING_OFFSET: f64 = 0.5;

/// Water coverage: `1 - water / WATER_DIVISOR`.
pub(crate) const WATER_DIVISOR: f64 = 300.0;

/// Vehicle volume: `0.4 + vehicles / 100`.
pub(crate) const VEHICLE_OFFSET: f64 = 0.4;

/// Industrial activity on industrial cells: `0.5 + industrial / 80`.
pub(crate) const INDUSTRIAL_OWN_OFFSET: f64 = 0.5;
pub(crate) const INDUSTRIAL_OWN_DIVISOR: f64 = 80.0;

/// Industrial activity spill-over on other cells: `0.7 + industrial / 200`.
pub(crate) const INDUSTRIAL_SPILL_OFFSET: f64 = 0.7;
pub(crate) const INDUSTRIAL_SPILL_DIVISOR: f64 = 200.0;

/// Energy consumption: `0.5 + energy / 100`.
pub(crate) const ENERGY_OFFSET: f64 = 0.5;

/// Congestion on transport cells: `0.6 + congestion / 100`.
pub(crate) const CONGESTION_OWN_OFFSET: f64 = 0.6;
pub(crate) const CONGESTION_OWN_DIVISOR: f64 = 100.0;

/// Congestion on other cells: `0.8 + congestion / 200`.
pub(crate) const CONGESTION_SPILL_OFFSET: f64 = 0.8;
pub(crate) const CONGESTION_SPILL_DIVISOR: f64 = 200.0;

/// Public transport: `1.2 - public_transport / 150`.
pub(crate) const PUBLIC_TRANSPORT_CEILING: f64 = 1.2;
pub(crate) const PUBLIC_TRANSPORT_DIVISOR: f64 = 150.0;

/// Divisor shared by the plain percentage terms.
pub(crate) const PERCENT: f64 = 100.0;
