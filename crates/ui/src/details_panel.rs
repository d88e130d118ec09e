//! Right side panel: KPIs, the selected cell with its interventions, the
//! placement ledger and the current recommendations.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::game_actions::{ActionQueue, ActionSource, TwinAction};
use simulation::grid::{Cell, CellCategory, CityGrid};
use simulation::interventions::{InterventionLedger, CATALOG};
use simulation::kpi::{cell_current_emission, percent_change, CityKpis};
use simulation::recommendations::Recommendations;

use crate::graphs::share_bar;
use crate::grid_map::SelectedCell;
use crate::theme::ACCENT;

const GOOD: egui::Color32 = egui::Color32::from_rgb(80, 220, 120);
const BAD: egui::Color32 = egui::Color32::from_rgb(240, 100, 90);

pub(crate) fn category_color(category: CellCategory) -> egui::Color32 {
    match category {
        CellCategory::Residential => egui::Color32::from_rgb(110, 170, 240),
        CellCategory::Industrial => egui::Color32::from_rgb(230, 120, 70),
        CellCategory::Commercial => egui::Color32::from_rgb(200, 170, 240),
        CellCategory::Transport => egui::Color32::from_rgb(240, 200, 80),
    }
}

/// Reason a catalog entry cannot go on a cell of `category`, if any.
pub(crate) fn unsuitable_reason(
    suitable_for: &[CellCategory],
    category: CellCategory,
) -> Option<String> {
    if suitable_for.contains(&category) {
        return None;
    }
    let allowed: Vec<&str> = suitable_for.iter().map(|c| c.label()).collect();
    Some(format!(
        "Not suitable for {category} areas (only {})",
        allowed.join(", ")
    ))
}

pub fn details_panel_ui(
    mut contexts: EguiContexts,
    mut queue: ResMut<ActionQueue>,
    mut selected: ResMut<SelectedCell>,
    grid: Res<CityGrid>,
    ledger: Res<InterventionLedger>,
    kpis: Res<CityKpis>,
    recommendations: Res<Recommendations>,
) {
    egui::SidePanel::right("details_panel")
        .default_width(320.0)
        .show(contexts.ctx_mut(), |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                kpi_section(ui, &kpis);
                ui.separator();

                let cell = selected.0.and_then(|id| grid.get(id));
                match cell {
                    Some(cell) => cell_section(ui, &mut queue, cell, &ledger),
                    None => {
                        ui.label(egui::RichText::new("Selected Cell").strong());
                        ui.weak("Click a cell on the map to inspect it.");
                    }
                }
                ui.separator();

                ledger_section(ui, &mut queue, &mut selected, &ledger);
                ui.separator();

                recommendation_section(ui, &mut selected, &recommendations);
            });
        });
}

fn kpi_section(ui: &mut egui::Ui, kpis: &CityKpis) {
    ui.label(egui::RichText::new("Key Indicators").strong());

    let current = &kpis.current;
    let baseline = &kpis.baseline;
    let change = percent_change(current.total_emissions, baseline.total_emissions);

    egui::Grid::new("kpi_grid")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            ui.label("Total emissions");
            ui.horizontal(|ui| {
                ui.label(format!("{:.1} t/yr", current.total_emissions));
                let color = if change < 0.0 { GOOD } else { ui.visuals().weak_text_color() };
                ui.colored_label(color, format!("({change:+.1}%)"));
            });
            ui.end_row();

            ui.label("Baseline");
            ui.label(format!("{:.1} t/yr", baseline.total_emissions));
            ui.end_row();

            ui.label("Emission reduction");
            ui.label(format!("{:.1}%", current.emission_reduction));
            ui.end_row();

            ui.label("Intervention efficiency");
            ui.label(format!("{:.1}%", current.intervention_efficiency));
            ui.end_row();

            ui.label("Cost effectiveness");
            ui.label(format!("${:.0} / t", current.cost_effectiveness));
            ui.end_row();

            ui.label("Projected savings");
            ui.label(format!("{:.1} t/yr", current.projected_savings));
            ui.end_row();

            ui.label("Hotspots");
            let color = if current.hotspot_count < baseline.hotspot_count {
                GOOD
            } else if current.hotspot_count > 0 {
                BAD
            } else {
                ui.visuals().text_color()
            };
            ui.colored_label(
                color,
                format!("{} (baseline {})", current.hotspot_count, baseline.hotspot_count),
            );
            ui.end_row();
        });

    ui.add_space(6.0);
    ui.label(egui::RichText::new("By category").small());
    let max = kpis
        .by_category
        .iter()
        .map(|b| b.baseline)
        .fold(0.0_f64, f64::max);
    for breakdown in &kpis.by_category {
        let fraction = if max > 0.0 {
            (breakdown.current / max) as f32
        } else {
            0.0
        };
        share_bar(
            ui,
            breakdown.category.label(),
            fraction,
            &format!("{:.0} / {:.0}", breakdown.current, breakdown.baseline),
            category_color(breakdown.category),
        );
    }
}

fn cell_section(
    ui: &mut egui::Ui,
    queue: &mut ActionQueue,
    cell: &Cell,
    ledger: &InterventionLedger,
) {
    ui.label(egui::RichText::new(format!("Cell {}", cell.id)).strong());
    ui.horizontal(|ui| {
        ui.label("Category:");
        ui.colored_label(category_color(cell.category), cell.category.label());
    });
    ui.label(format!("Emission: {:.1} t/yr", cell.emission));
    let current = cell_current_emission(cell, ledger);
    if current < cell.emission {
        ui.colored_label(GOOD, format!("After interventions: {current:.1} t/yr"));
    }

    ui.add_space(4.0);
    ui.label(egui::RichText::new("Place intervention").small());
    for entry in &CATALOG {
        ui.horizontal(|ui| {
            let reason = unsuitable_reason(entry.suitable_for, cell.category);
            let button = ui.add_enabled(reason.is_none(), egui::Button::new("Place"));
            let clicked = button.clicked();
            if let Some(reason) = reason {
                button.on_disabled_hover_text(reason);
            }
            if clicked {
                queue.push(
                    ActionSource::Dashboard,
                    TwinAction::PlaceIntervention {
                        cell: cell.id,
                        intervention: entry.id,
                    },
                );
            }
            ui.label(entry.name).on_hover_text(entry.description);
            ui.weak(format!("-{:.0}% · ${:.0}", entry.efficiency, entry.cost));
        });
    }
}

fn ledger_section(
    ui: &mut egui::Ui,
    queue: &mut ActionQueue,
    selected: &mut SelectedCell,
    ledger: &InterventionLedger,
) {
    ui.label(egui::RichText::new(format!("Placed interventions ({})", ledger.len())).strong());
    if ledger.is_empty() {
        ui.weak("None yet.");
        return;
    }
    for placement in ledger.placements() {
        ui.horizontal(|ui| {
            if ui.small_button("x").on_hover_text("Remove").clicked() {
                queue.push(
                    ActionSource::Dashboard,
                    TwinAction::RemoveIntervention {
                        placement: placement.id,
                    },
                );
            }
            let name = placement.intervention.entry().name;
            let highlighted = selected.0 == Some(placement.cell);
            if ui
                .selectable_label(highlighted, format!("{name} @ {}", placement.cell))
                .clicked()
            {
                selected.0 = Some(placement.cell);
            }
        });
    }
    ui.label(format!("Total cost: ${:.0}", ledger.total_cost()));
}

fn recommendation_section(
    ui: &mut egui::Ui,
    selected: &mut SelectedCell,
    recommendations: &Recommendations,
) {
    ui.label(egui::RichText::new("Recommendations").strong());
    if recommendations.items.is_empty() {
        ui.weak("Apply the factors to generate recommendations.");
        return;
    }
    for rec in &recommendations.items {
        egui::Frame::new()
            .fill(ui.visuals().faint_bg_color)
            .corner_radius(egui::CornerRadius::same(4))
            .inner_margin(egui::Margin::symmetric(6, 4))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(ACCENT, rec.intervention);
                    if ui.small_button("Show").clicked() {
                        selected.0 = Some(rec.cell);
                    }
                });
                ui.small(format!(
                    "Cell {} ({}) · {:.1} t/yr · -{:.0}%",
                    rec.cell, rec.category, rec.emission, rec.reduction
                ));
                ui.small(rec.explanation);
            });
        ui.add_space(2.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsuitable_reason_none_when_allowed() {
        let allowed = [CellCategory::Industrial, CellCategory::Commercial];
        assert_eq!(unsuitable_reason(&allowed, CellCategory::Commercial), None);
    }

    #[test]
    fn test_unsuitable_reason_lists_allowed_categories() {
        let allowed = [CellCategory::Industrial, CellCategory::Transport];
        assert_eq!(
            unsuitable_reason(&allowed, CellCategory::Residential).as_deref(),
            Some("Not suitable for residential areas (only industrial, transport)")
        );
    }

    #[test]
    fn test_every_catalog_entry_fits_some_category() {
        for entry in &CATALOG {
            assert!(CellCategory::ALL
                .iter()
                .any(|&c| unsuitable_reason(entry.suitable_for, c).is_none()));
        }
    }
}
