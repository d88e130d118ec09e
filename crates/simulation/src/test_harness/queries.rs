//! Action, tick, and query methods for `TestTwin`.

use std::time::Duration;

use bevy::prelude::*;

use crate::emissions::PendingRecalc;
use crate::factors::FactorSet;
use crate::game_actions::{ActionQueue, ActionResult, ActionResultLog, ActionSource, TwinAction};
use crate::geocode::LocationSearch;
use crate::grid::{Cell, CellId, CityGrid};
use crate::interventions::InterventionLedger;
use crate::kpi::CityKpis;
use crate::notices::Notices;
use crate::projection::ProjectionState;
use crate::recommendations::Recommendations;

use super::TestTwin;

impl TestTwin {
    // -----------------------------------------------------------------------
    // Simulation
    // -----------------------------------------------------------------------

    /// Run N fixed-update ticks by directly executing the `FixedUpdate`
    /// schedule. Virtual time does not advance; use [`TestTwin::elapse`] for
    /// anything timer driven.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    /// Advance the pending recalculation by `duration`, then run one tick.
    pub fn elapse(&mut self, duration: Duration) {
        self.app
            .world_mut()
            .resource_mut::<PendingRecalc>()
            .tick(duration);
        self.tick(1);
    }

    /// Queue `action`, run one tick, and return its result.
    pub fn act(&mut self, action: TwinAction) -> ActionResult {
        self.queue(action);
        self.tick(1);
        self.last_result()
    }

    /// Queue `action` without running the executor.
    pub fn queue(&mut self, action: TwinAction) {
        self.app
            .world_mut()
            .resource_mut::<ActionQueue>()
            .push(ActionSource::Scripted, action);
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<R: Resource>(&self) -> &R {
        self.app.world().resource::<R>()
    }

    pub fn grid(&self) -> &CityGrid {
        self.resource::<CityGrid>()
    }

    pub fn cell(&self, id: CellId) -> &Cell {
        self.grid()
            .get(id)
            .unwrap_or_else(|| panic!("cell {id} not on the grid"))
    }

    pub fn factors(&self) -> &FactorSet {
        self.resource::<FactorSet>()
    }

    pub fn ledger(&self) -> &InterventionLedger {
        self.resource::<InterventionLedger>()
    }

    pub fn kpis(&self) -> &CityKpis {
        self.resource::<CityKpis>()
    }

    pub fn projection(&self) -> &ProjectionState {
        self.resource::<ProjectionState>()
    }

    pub fn recommendations(&self) -> &Recommendations {
        self.resource::<Recommendations>()
    }

    pub fn notices(&self) -> &Notices {
        self.resource::<Notices>()
    }

    pub fn search(&self) -> &LocationSearch {
        self.resource::<LocationSearch>()
    }

    pub fn pending_recalc(&self) -> &PendingRecalc {
        self.resource::<PendingRecalc>()
    }

    pub fn log(&self) -> &ActionResultLog {
        self.resource::<ActionResultLog>()
    }

    /// Result of the most recently executed action.
    pub fn last_result(&self) -> ActionResult {
        self.log()
            .last_result()
            .cloned()
            .unwrap_or_else(|| panic!("no action has been executed"))
    }

    /// Per-cell emissions in grid order.
    pub fn emissions(&self) -> Vec<f64> {
        self.grid().cells().iter().map(|c| c.emission).collect()
    }
}
