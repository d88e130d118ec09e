//! # TestTwin: headless integration test harness
//!
//! Provides a fluent builder that wraps `bevy::app::App` + `SimulationPlugin`
//! for running integration tests without a window or renderer.

mod assertions;
mod queries;
mod setup;

use bevy::app::App;
use bevy::prelude::*;

use crate::config::SimulationConfig;
use crate::world_init::SkipGridInit;
use crate::SimulationPlugin;

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
///
/// Use builder methods to set up twin state, then call `act()` / `tick()` to
/// advance the simulation and query/assert on the resulting resources.
pub struct TestTwin {
    app: App,
}

impl Default for TestTwin {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTwin {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// A generated 12x12 grid with the default seed and fixed base emissions.
    pub fn new() -> Self {
        Self::build(SimulationConfig::default(), false)
    }

    /// A generated grid using `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::build(
            SimulationConfig {
                seed: Some(seed),
                ..Default::default()
            },
            false,
        )
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        Self::build(config, false)
    }

    /// No generated grid; install one with [`TestTwin::with_grid`].
    pub fn empty() -> Self {
        Self::build(SimulationConfig::default(), true)
    }

    fn build(config: SimulationConfig, skip_grid: bool) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);

        // Both must be present before Startup runs.
        app.insert_resource(config);
        if skip_grid {
            app.insert_resource(SkipGridInit);
        }
        app.add_plugins(SimulationPlugin);

        // Run one update so Startup systems execute.
        app.update();

        Self { app }
    }
}
