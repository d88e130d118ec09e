//! Grid emission model.
//!
//! Each cell's emission is a random category-specific base multiplied by
//! eight factor terms, applied in this order:
//!
//! | # | Factor            | Multiplier                                             |
//! |---|-------------------|--------------------------------------------------------|
//! | 1 | green coverage    | `1 - green/200`                                        |
//! | 2 | building density  | `0.5 + building/100`                                   |
//! | 3 | water coverage    | `1 - water/300`                                        |
//! | 4 | vehicle volume    | `0.4 + vehicles/100`                                   |
//! | 5 | industrial        | industrial cell `0.5 + i/80`, else `0.7 + i/200`        |
//! | 6 | energy use        | `0.5 + energy/100`                                     |
//! | 7 | congestion        | transport cell `0.6 + c/100`, else `0.8 + c/200`        |
//! | 8 | public transport  | `1.2 - pt/150`                                         |
//!
//! Base ranges: industrial 30-90, commercial 20-60, transport 15-50,
//! residential 5-30. The result is floored at zero.

pub mod calculations;
pub mod constants;
pub mod recalc;

#[cfg(test)]
mod tests;

pub use calculations::*;
pub use recalc::{drive_pending_recalc, PendingRecalc};
