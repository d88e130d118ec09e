//! Multi-year Monte Carlo emission projection.
//!
//! Every projected year averages `TRIALS_PER_YEAR` independent trials. A
//! trial starts from the previous year's mean (the start emission for the
//! first year) and applies one multiplicative perturbation per growth factor,
//! in the order population, vehicle, industrial, residential, commercial:
//!
//! ```text
//! value *= 1 + (rate / 100) * (1 + noise),  noise ~ U[-spread, spread)
//! ```
//!
//! | Factor      | Spread | Slider range |
//! |-------------|--------|--------------|
//! | Population  | 0.5    | 0 - 10 %     |
//! | Vehicle     | 0.4    | 0 - 15 %     |
//! | Industrial  | 0.6    | 0 - 20 %     |
//! | Residential | 0.3    | 0 - 10 %     |
//! | Commercial  | 0.3    | 0 - 10 %     |
//!
//! Noise scales with the rate, so all-zero rates never drift.

pub mod calculations;
pub mod constants;
pub mod state;
pub mod summary;


pub use calculations::*;
pub use state::*;
pub use summary::*;
