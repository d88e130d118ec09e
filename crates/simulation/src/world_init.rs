use bevy::prelude::*;

use crate::config::SimulationConfig;
use crate::grid::CityGrid;
use crate::sim_rng::SimRng;

/// Marker resource that, when present, causes `init_twin` to leave the grid
/// empty. Used by the test harness to install hand-built grids.
#[derive(Resource)]
pub struct SkipGridInit;

/// Reseed the RNG from the configuration and generate the city grid.
pub fn init_twin(
    config: Res<SimulationConfig>,
    mut rng: ResMut<SimRng>,
    mut grid: ResMut<CityGrid>,
    skip: Option<Res<SkipGridInit>>,
) {
    let seed = config.effective_seed();
    *rng = SimRng::from_seed_u64(seed);
    if skip.is_some() {
        return;
    }

    *grid = CityGrid::generate_default(&mut rng.0);
    info!(
        "Generated {}x{} city grid (seed {}, {:?}): total {:.1} t CO2",
        grid.width,
        grid.height,
        seed,
        config.base_mode,
        grid.total_emission()
    );
}
