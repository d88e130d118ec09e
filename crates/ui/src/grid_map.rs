//! Central heat map of the city grid. Clicking a cell selects it for the
//! details panel.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::config::HOTSPOT_THRESHOLD;
use simulation::grid::{CellId, CityGrid};
use simulation::interventions::InterventionLedger;
use simulation::kpi::cell_current_emission;

use crate::graphs::{emission_color, legend_item};
use crate::theme::ACCENT;

/// Emission drawn with the hottest colour.
const HEAT_SCALE_MAX: f64 = HOTSPOT_THRESHOLD * 3.0;

/// Cell picked on the map, if any.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectedCell(pub Option<CellId>);

pub(crate) fn heat_level(emission: f64) -> f32 {
    (emission / HEAT_SCALE_MAX) as f32
}

/// Grid cell under `pos` for a map drawn at `origin` with square cells.
pub(crate) fn cell_at(
    origin: egui::Pos2,
    cell_size: f32,
    grid: &CityGrid,
    pos: egui::Pos2,
) -> Option<CellId> {
    let local = pos - origin;
    if local.x < 0.0 || local.y < 0.0 || cell_size <= 0.0 {
        return None;
    }
    let id = CellId::new((local.x / cell_size) as u32, (local.y / cell_size) as u32);
    grid.in_bounds(id).then_some(id)
}

pub fn grid_map_ui(
    mut contexts: EguiContexts,
    grid: Res<CityGrid>,
    ledger: Res<InterventionLedger>,
    mut selected: ResMut<SelectedCell>,
) {
    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        ui.horizontal(|ui| {
            ui.heading("Emission Map");
            ui.add_space(16.0);
            legend_item(ui, emission_color(0.0), "Low");
            legend_item(ui, emission_color(0.5), "Medium");
            legend_item(ui, emission_color(1.0), "High");
            legend_item(ui, ACCENT, "Intervention");
        });
        ui.separator();

        if grid.is_empty() {
            ui.label("Grid not generated yet.");
            return;
        }

        let available = ui.available_size();
        let cell_size = (available.x / grid.width as f32)
            .min(available.y / grid.height as f32)
            .max(4.0);
        let size = egui::vec2(cell_size * grid.width as f32, cell_size * grid.height as f32);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
        let painter = ui.painter_at(rect);

        for cell in grid.cells() {
            let min = rect.min
                + egui::vec2(cell.id.x as f32 * cell_size, cell.id.y as f32 * cell_size);
            let cell_rect =
                egui::Rect::from_min_size(min, egui::vec2(cell_size, cell_size)).shrink(1.0);
            let emission = cell_current_emission(cell, &ledger);
            painter.rect_filled(cell_rect, 2.0, emission_color(heat_level(emission)));

            if ledger.for_cell(cell.id).next().is_some() {
                painter.circle_filled(cell_rect.center(), cell_size * 0.15, ACCENT);
            }
            if selected.0 == Some(cell.id) {
                painter.add(egui::Shape::closed_line(
                    vec![
                        cell_rect.left_top(),
                        cell_rect.right_top(),
                        cell_rect.right_bottom(),
                        cell_rect.left_bottom(),
                    ],
                    egui::Stroke::new(2.0, egui::Color32::WHITE),
                ));
            }
        }

        if response.clicked() {
            if let Some(id) = response
                .interact_pointer_pos()
                .and_then(|pos| cell_at(rect.min, cell_size, &grid, pos))
            {
                selected.0 = Some(id);
            }
        }

        let hovered = response
            .hover_pos()
            .and_then(|pos| cell_at(rect.min, cell_size, &grid, pos))
            .and_then(|id| grid.get(id));
        if let Some(cell) = hovered {
            response.on_hover_text(format!(
                "Cell {}\nCategory: {}\nEmission: {:.1} t/yr",
                cell.id,
                cell.category,
                cell_current_emission(cell, &ledger)
            ));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use simulation::grid::{Cell, CellCategory};

    fn grid_3x2() -> CityGrid {
        let cells = (0..2)
            .flat_map(|y| (0..3).map(move |x| (x, y)))
            .map(|(x, y)| Cell::new(CellId::new(x, y), CellCategory::Residential, 10.0))
            .collect();
        CityGrid::from_cells(3, 2, cells)
    }

    #[test]
    fn test_cell_at_maps_pointer_to_cell() {
        let grid = grid_3x2();
        let origin = egui::pos2(100.0, 50.0);
        assert_eq!(
            cell_at(origin, 20.0, &grid, egui::pos2(101.0, 51.0)),
            Some(CellId::new(0, 0))
        );
        assert_eq!(
            cell_at(origin, 20.0, &grid, egui::pos2(159.0, 89.0)),
            Some(CellId::new(2, 1))
        );
    }

    #[test]
    fn test_cell_at_rejects_outside_positions() {
        let grid = grid_3x2();
        let origin = egui::pos2(100.0, 50.0);
        assert_eq!(cell_at(origin, 20.0, &grid, egui::pos2(99.0, 60.0)), None);
        assert_eq!(cell_at(origin, 20.0, &grid, egui::pos2(161.0, 60.0)), None);
        assert_eq!(cell_at(origin, 20.0, &grid, egui::pos2(110.0, 91.0)), None);
    }

    #[test]
    fn test_heat_level_scales_to_threshold_multiple() {
        assert_eq!(heat_level(0.0), 0.0);
        assert!((heat_level(HOTSPOT_THRESHOLD * 3.0) - 1.0).abs() < 1e-6);
        assert!((heat_level(HOTSPOT_THRESHOLD * 1.5) - 0.5).abs() < 1e-6);
    }
}
