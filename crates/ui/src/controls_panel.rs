//! Left side panel: location search and the urban factor sliders.
//!
//! Every change is pushed onto the [`ActionQueue`]; the simulation applies it
//! on the next fixed tick.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::emissions::PendingRecalc;
use simulation::factors::{Factor, FactorSet};
use simulation::game_actions::{ActionQueue, ActionSource, TwinAction};
use simulation::geocode::LocationSearch;

use crate::theme::ACCENT;

/// Text typed into the location search box.
#[derive(Resource, Debug, Default)]
pub struct SearchInput(pub String);

pub fn controls_panel_ui(
    mut contexts: EguiContexts,
    mut queue: ResMut<ActionQueue>,
    mut input: ResMut<SearchInput>,
    factors: Res<FactorSet>,
    pending: Res<PendingRecalc>,
    search: Res<LocationSearch>,
) {
    egui::SidePanel::left("controls_panel")
        .default_width(280.0)
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading(egui::RichText::new("VayuVision CO₂ Twin").color(ACCENT));
            ui.separator();

            location_section(ui, &mut queue, &mut input.0, &search);
            ui.separator();
            factor_section(ui, &mut queue, &factors, &pending);
        });
}

fn location_section(
    ui: &mut egui::Ui,
    queue: &mut ActionQueue,
    input: &mut String,
    search: &LocationSearch,
) {
    ui.label(egui::RichText::new("Location").strong());

    let busy = search.is_busy();
    let mut submit = false;
    ui.horizontal(|ui| {
        let field = ui.add(
            egui::TextEdit::singleline(input)
                .hint_text("Enter location...")
                .desired_width(180.0),
        );
        if field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }
        if ui.add_enabled(!busy, egui::Button::new("Search")).clicked() {
            submit = true;
        }
    });
    if submit && !busy {
        queue.push(
            ActionSource::Dashboard,
            TwinAction::SearchLocation {
                query: input.clone(),
            },
        );
    }

    if busy {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Searching...");
        });
    }

    if let Some(location) = &search.selected {
        ui.label(&location.name);
        ui.small(format!("{:.4}, {:.4}", location.lat, location.lon));
    } else {
        ui.weak("No location selected");
    }
}

fn factor_section(
    ui: &mut egui::Ui,
    queue: &mut ActionQueue,
    factors: &FactorSet,
    pending: &PendingRecalc,
) {
    ui.label(egui::RichText::new("Urban Factors").strong());
    ui.add_space(4.0);

    for factor in Factor::ALL {
        let mut value = factors.get(factor);
        ui.label(factor.label());
        let slider = egui::Slider::new(&mut value, 0.0..=100.0)
            .step_by(5.0)
            .suffix("%");
        if ui.add(slider).changed() {
            queue.push(ActionSource::Dashboard, TwinAction::SetFactor { factor, value });
        }
    }

    ui.add_space(8.0);
    let is_pending = pending.is_pending();
    ui.horizontal(|ui| {
        if ui
            .add_enabled(!is_pending, egui::Button::new("Apply"))
            .on_hover_text("Recalculate and refresh recommendations")
            .clicked()
        {
            queue.push(ActionSource::Dashboard, TwinAction::ApplyFactors);
        }
        if ui.button("Reset").clicked() {
            queue.push(ActionSource::Dashboard, TwinAction::ResetFactors);
        }
        if ui
            .add_enabled(is_pending, egui::Button::new("Cancel"))
            .clicked()
        {
            queue.push(ActionSource::Dashboard, TwinAction::CancelRecalc);
        }
    });

    if let Some(secs) = pending.remaining_secs() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(format!("Recalculating in {secs:.1}s"));
        });
    }
}
