//! Deferred, cancelable grid recalculation ("apply factors").

use std::time::Duration;

use bevy::prelude::*;

use crate::config::{SimulationConfig, RECALC_DELAY_SECS};
use crate::factors::FactorSet;
use crate::grid::CityGrid;
use crate::notices::Notices;
use crate::recommendations::Recommendations;
use crate::sim_rng::SimRng;

use super::calculations::recalculate_grid;

/// At most one pending recalculation. Scheduling again restarts the delay;
/// cancelling simply drops it.
#[derive(Resource, Debug, Default)]
pub struct PendingRecalc {
    timer: Option<Timer>,
}

impl PendingRecalc {
    pub fn schedule(&mut self) {
        self.timer = Some(Timer::from_seconds(RECALC_DELAY_SECS, TimerMode::Once));
    }

    /// Drop the pending recalculation. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.timer.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_some()
    }

    /// Seconds until the pending recalculation fires.
    pub fn remaining_secs(&self) -> Option<f32> {
        self.timer.as_ref().map(|t| t.remaining_secs())
    }

    pub fn tick(&mut self, delta: Duration) {
        if let Some(timer) = self.timer.as_mut() {
            timer.tick(delta);
        }
    }

    /// Clear the timer and return `true` once it has finished.
    pub fn take_finished(&mut self) -> bool {
        if self.timer.as_ref().is_some_and(Timer::finished) {
            self.timer = None;
            true
        } else {
            false
        }
    }
}

/// Advances the pending recalculation and, once due, recomputes every cell
/// and regenerates the recommendations.
#[allow(clippy::too_many_arguments)]
pub fn drive_pending_recalc(
    time: Res<Time>,
    config: Res<SimulationConfig>,
    factors: Res<FactorSet>,
    mut pending: ResMut<PendingRecalc>,
    mut grid: ResMut<CityGrid>,
    mut rng: ResMut<SimRng>,
    mut recommendations: ResMut<Recommendations>,
    mut notices: ResMut<Notices>,
) {
    if !pending.is_pending() {
        return;
    }
    pending.tick(time.delta());
    if !pending.take_finished() {
        return;
    }

    recalculate_grid(&mut grid, &factors, config.base_mode, &mut rng.0);
    recommendations.refresh(&grid);

    info!(
        "Recalculated {} cells: total {:.1} t CO2, {} recommendations",
        grid.len(),
        grid.total_emission(),
        recommendations.items.len()
    );
    notices.success("Recommendations generated successfully!");
}
