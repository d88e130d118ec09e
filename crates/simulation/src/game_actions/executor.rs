//! Action executor system: drains the [`ActionQueue`] each fixed-update tick
//! and applies every queued [`TwinAction`], recording results in the
//! [`ActionResultLog`].
//!
//! Each action variant has a dedicated execution function that validates
//! inputs, mutates the twin's resources, pushes the user-facing notice, and
//! returns an [`ActionResult`].

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::config::{
    current_calendar_year, SimulationConfig, MAX_PROJECTION_YEARS, MIN_PROJECTION_YEARS,
};
use crate::emissions::{recalculate_grid, PendingRecalc};
use crate::factors::{Factor, FactorSet};
use crate::geocode::{validate_query, LocationSearch};
use crate::grid::{CellId, CityGrid};
use crate::interventions::{InterventionId, InterventionLedger, PlacementId};
use crate::kpi::current_kpis;
use crate::notices::Notices;
use crate::projection::{run_projection, GrowthFactor, ProjectionState};
use crate::sim_rng::SimRng;

use super::result_log::ActionResultLog;
use super::{ActionError, ActionQueue, ActionResult, TwinAction};

/// Mutable access to everything an action may touch.
#[derive(SystemParam)]
pub(crate) struct TwinStateMut<'w> {
    pub config: Res<'w, SimulationConfig>,
    pub factors: ResMut<'w, FactorSet>,
    pub grid: ResMut<'w, CityGrid>,
    pub rng: ResMut<'w, SimRng>,
    pub pending: ResMut<'w, PendingRecalc>,
    pub ledger: ResMut<'w, InterventionLedger>,
    pub projection: ResMut<'w, ProjectionState>,
    pub search: ResMut<'w, LocationSearch>,
    pub notices: ResMut<'w, Notices>,
}

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

/// Drains all pending actions from the queue and executes them in order.
pub(crate) fn execute_queued_actions(
    mut queue: ResMut<ActionQueue>,
    mut log: ResMut<ActionResultLog>,
    mut state: TwinStateMut,
) {
    if queue.is_empty() {
        return;
    }
    for queued in queue.drain() {
        let result = execute_single(&queued.action, &mut state);
        if let ActionResult::Error(err) = &result {
            warn!("Rejected {:?} from {:?}: {}", queued.action, queued.source, err);
        }
        log.push(queued.action, result);
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

fn execute_single(action: &TwinAction, state: &mut TwinStateMut) -> ActionResult {
    match action {
        TwinAction::SetFactor { factor, value } => execute_set_factor(*factor, *value, state),
        TwinAction::ResetFactors => execute_reset_factors(state),
        TwinAction::ApplyFactors => execute_apply_factors(state),
        TwinAction::CancelRecalc => execute_cancel_recalc(state),
        TwinAction::PlaceIntervention { cell, intervention } => {
            execute_place_intervention(*cell, *intervention, state)
        }
        TwinAction::RemoveIntervention { placement } => {
            execute_remove_intervention(*placement, state)
        }
        TwinAction::SetGrowthRate { factor, rate } => execute_set_growth_rate(*factor, *rate, state),
        TwinAction::SetProjectionYears { years } => execute_set_projection_years(*years, state),
        TwinAction::RunProjection => execute_run_projection(state),
        TwinAction::SearchLocation { query } => execute_search_location(query, state),
    }
}

// ---------------------------------------------------------------------------
// Execution functions
// ---------------------------------------------------------------------------

fn recalculate_now(state: &mut TwinStateMut) {
    let mode = state.config.base_mode;
    recalculate_grid(&mut state.grid, &state.factors, mode, &mut state.rng.0);
}

fn check_finite(value: f64, what: &str) -> Result<(), ActionError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ActionError::InvalidParameter(format!(
            "{what} must be a finite number"
        )))
    }
}

/// Set one factor and recalculate every cell right away. Values outside
/// 0..=100 are accepted with a warning.
fn execute_set_factor(factor: Factor, value: f64, state: &mut TwinStateMut) -> ActionResult {
    if let Err(e) = check_finite(value, factor.label()) {
        return e.into();
    }
    state.factors.set(factor, value);
    recalculate_now(state);

    if (0.0..=100.0).contains(&value) {
        ActionResult::Success
    } else {
        ActionResult::SuccessWithWarning(format!(
            "{} set to {value}, outside 0-100",
            factor.label()
        ))
    }
}

fn execute_reset_factors(state: &mut TwinStateMut) -> ActionResult {
    *state.factors = FactorSet::default();
    recalculate_now(state);
    state.notices.success("Parameters reset to default");
    ActionResult::Success
}

/// Schedule the deferred recalculation; a pending one is restarted.
fn execute_apply_factors(state: &mut TwinStateMut) -> ActionResult {
    state.pending.schedule();
    state
        .notices
        .success("Recalculating emissions and generating recommendations...");
    ActionResult::Success
}

fn execute_cancel_recalc(state: &mut TwinStateMut) -> ActionResult {
    if state.pending.cancel() {
        state.notices.info("Recalculation cancelled");
        ActionResult::Success
    } else {
        ActionError::NothingPending.into()
    }
}

fn execute_place_intervention(
    cell: CellId,
    intervention: InterventionId,
    state: &mut TwinStateMut,
) -> ActionResult {
    match state.ledger.place(&state.grid, cell, intervention) {
        Ok(id) => {
            let name = intervention.entry().name;
            info!("Placed {} on cell {} as {}", name, cell, id);
            state.notices.success(format!("{name} placed successfully!"));
            ActionResult::Placed(id)
        }
        Err(err) => {
            state.notices.error(err.to_string());
            err.into()
        }
    }
}

fn execute_remove_intervention(placement: PlacementId, state: &mut TwinStateMut) -> ActionResult {
    // Look first so a miss does not mark the ledger as changed.
    if state.ledger.get(placement).is_none() {
        state.notices.error(format!("Intervention {placement} not found"));
        return ActionError::NotFound.into();
    }
    state.ledger.remove(placement);
    state.notices.success("Intervention removed");
    ActionResult::Success
}

/// Rates outside the slider range are accepted with a warning.
fn execute_set_growth_rate(factor: GrowthFactor, rate: f64, state: &mut TwinStateMut) -> ActionResult {
    if let Err(e) = check_finite(rate, factor.label()) {
        return e.into();
    }
    state.projection.growth.set(factor, rate);

    if (0.0..=factor.max_rate()).contains(&rate) {
        ActionResult::Success
    } else {
        ActionResult::SuccessWithWarning(format!(
            "{} set to {rate}, outside 0-{}",
            factor.label(),
            factor.max_rate()
        ))
    }
}

fn horizon_error() -> ActionError {
    ActionError::InvalidParameter(format!(
        "Prediction years must be between {MIN_PROJECTION_YEARS} and {MAX_PROJECTION_YEARS}"
    ))
}

fn execute_set_projection_years(years: u32, state: &mut TwinStateMut) -> ActionResult {
    if !(MIN_PROJECTION_YEARS..=MAX_PROJECTION_YEARS).contains(&years) {
        return horizon_error().into();
    }
    state.projection.years = years;
    ActionResult::Success
}

/// Project from the current post-intervention total.
fn execute_run_projection(state: &mut TwinStateMut) -> ActionResult {
    let years = state.projection.years;
    if !(MIN_PROJECTION_YEARS..=MAX_PROJECTION_YEARS).contains(&years) {
        let err = horizon_error();
        state.notices.error(err.to_string());
        return err.into();
    }

    state.notices.info("Running prediction...");
    let start = current_kpis(&state.grid, &state.ledger).total_emissions;
    let growth = state.projection.growth;
    let first_year = current_calendar_year() + 1;
    let results = run_projection(start, &growth, years, first_year, &mut state.rng.0);

    let projection = &mut *state.projection;
    projection.start_emission = start;
    projection.result_growth = growth;
    projection.results = results;

    let final_emission = projection.results.last().map_or(start, |p| p.emission);
    info!(
        "Projected {} years from {:.1} t: {:.1} t in {}",
        years,
        start,
        final_emission,
        first_year + years as i32 - 1
    );
    state.notices.success("Prediction complete!");
    ActionResult::Success
}

fn execute_search_location(query: &str, state: &mut TwinStateMut) -> ActionResult {
    let trimmed = match validate_query(query) {
        Ok(q) => q,
        Err(err) => {
            state.notices.error(err.user_message());
            return ActionError::InvalidParameter(err.to_string()).into();
        }
    };
    if !state.search.enqueue(trimmed) {
        state.notices.error("A location search is already in progress");
        return ActionError::InvalidParameter("a location search is already in progress".into())
            .into();
    }
    ActionResult::Success
}
