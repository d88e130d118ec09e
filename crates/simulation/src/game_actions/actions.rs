use serde::{Deserialize, Serialize};

use crate::factors::Factor;
use crate::grid::CellId;
use crate::interventions::{InterventionId, PlacementId};
use crate::projection::GrowthFactor;

/// Every state change the dashboard can request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TwinAction {
    /// Set one factor and recalculate every cell immediately.
    SetFactor { factor: Factor, value: f64 },
    /// Restore the default factor set and recalculate.
    ResetFactors,
    /// Schedule the deferred recalculation that also refreshes recommendations.
    ApplyFactors,
    CancelRecalc,
    PlaceIntervention {
        cell: CellId,
        intervention: InterventionId,
    },
    RemoveIntervention { placement: PlacementId },
    SetGrowthRate { factor: GrowthFactor, rate: f64 },
    SetProjectionYears { years: u32 },
    RunProjection,
    SearchLocation { query: String },
}
