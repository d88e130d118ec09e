use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod controls_panel;
pub mod details_panel;
pub mod graphs;
pub mod grid_map;
pub mod notice_toasts;
pub mod projection_panel;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<grid_map::SelectedCell>()
            .init_resource::<controls_panel::SearchInput>()
            .add_systems(Startup, theme::apply_twin_theme)
            // Side and bottom panels claim their space before the central map.
            .add_systems(
                Update,
                (
                    controls_panel::controls_panel_ui,
                    details_panel::details_panel_ui,
                    projection_panel::projection_panel_ui,
                    grid_map::grid_map_ui,
                    notice_toasts::notice_toasts_ui,
                )
                    .chain(),
            );
    }
}
