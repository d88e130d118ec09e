//! Deterministic ordering via `SystemSet` phases.
//!
//! # FixedUpdate phases (`SimulationSet`)
//!
//! ```text
//! PreSim  →  Simulation  →  PostSim
//! ```
//!
//! * **PreSim** – Drain the action queue. Every state change requested by
//!   the dashboard lands here, so the rest of the tick sees a settled input.
//! * **Simulation** – Deferred work driven by time: the pending
//!   recalculation and recommendation refresh.
//! * **PostSim** – Aggregation only (KPIs). Reads simulation state, never
//!   mutates it, so the UI can consume it on the next frame.

use bevy::prelude::*;

/// Ordered phases for systems running in the `FixedUpdate` schedule.
///
/// Configured as a chain: `PreSim` → `Simulation` → `PostSim`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    PreSim,
    Simulation,
    PostSim,
}
