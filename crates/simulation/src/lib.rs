use bevy::prelude::*;

pub mod config;
pub mod emissions;
pub mod factors;
pub mod game_actions;
pub mod geocode;
pub mod grid;
pub mod interventions;
pub mod kpi;
pub mod notices;
pub mod projection;
pub mod recommendations;
pub mod sim_rng;
pub mod simulation_sets;
pub mod world_init;

#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use simulation_sets::SimulationSet;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            FixedUpdate,
            (
                SimulationSet::PreSim,
                SimulationSet::Simulation,
                SimulationSet::PostSim,
            )
                .chain(),
        );

        // Inputs and authoritative state
        app.init_resource::<config::SimulationConfig>()
            .init_resource::<sim_rng::SimRng>()
            .init_resource::<factors::FactorSet>()
            .init_resource::<grid::CityGrid>()
            .init_resource::<interventions::InterventionLedger>()
            .init_resource::<projection::ProjectionState>()
            .init_resource::<geocode::LocationSearch>();

        // Derived state and feedback
        app.init_resource::<emissions::PendingRecalc>()
            .init_resource::<recommendations::Recommendations>()
            .init_resource::<kpi::CityKpis>()
            .init_resource::<notices::Notices>();

        app.add_systems(Startup, world_init::init_twin)
            .add_systems(
                FixedUpdate,
                emissions::drive_pending_recalc.in_set(SimulationSet::Simulation),
            )
            .add_systems(FixedUpdate, kpi::refresh_kpis.in_set(SimulationSet::PostSim));

        app.add_plugins(game_actions::TwinActionsPlugin);
    }
}
