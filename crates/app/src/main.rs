use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use simulation::config::{BaseEmissionMode, SimulationConfig};

#[cfg(target_arch = "wasm32")]
mod web_geocode;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "VayuVision CO₂ Twin".to_string(),
            resolution: (1440.0, 900.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .insert_resource(load_config())
    .add_plugins((simulation::SimulationPlugin, ui::UiPlugin));

    #[cfg(target_arch = "wasm32")]
    {
        app.init_resource::<web_geocode::GeocodeResponseBuffer>()
            .add_systems(
                Update,
                (
                    web_geocode::begin_location_lookup,
                    web_geocode::poll_location_lookup,
                ),
            );
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, reject_location_lookup);
    }

    app.run();
}

/// Seed and base-emission mode from the environment on native builds.
///
/// `CO2TWIN_SEED` fixes the grid seed (a random one is drawn otherwise) and a
/// non-empty `CO2TWIN_REDRAW_BASE` redraws every base emission on each
/// recalculation.
#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> SimulationConfig {
    let seed = match std::env::var("CO2TWIN_SEED") {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(seed) => seed,
            Err(e) => {
                warn!("Ignoring CO2TWIN_SEED='{}': {}", raw, e);
                rand::random()
            }
        },
        Err(_) => rand::random(),
    };
    let base_mode = match std::env::var("CO2TWIN_REDRAW_BASE") {
        Ok(v) if !v.trim().is_empty() => BaseEmissionMode::RedrawEachRecalc,
        _ => BaseEmissionMode::FixedPerCell,
    };
    SimulationConfig {
        seed: Some(seed),
        base_mode,
    }
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> SimulationConfig {
    SimulationConfig {
        seed: Some(rand::random()),
        base_mode: BaseEmissionMode::FixedPerCell,
    }
}

/// Native builds have no HTTP client; fail queued lookups straight away.
#[cfg(not(target_arch = "wasm32"))]
fn reject_location_lookup(
    mut search: ResMut<simulation::geocode::LocationSearch>,
    mut notices: ResMut<simulation::notices::Notices>,
) {
    if search.take_queued().is_none() {
        return;
    }
    search.finish(
        Err(simulation::geocode::GeocodeError::Transport(
            "location search is only available in the web build".to_string(),
        )),
        &mut notices,
    );
}
