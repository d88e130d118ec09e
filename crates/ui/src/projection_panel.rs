//! Bottom panel: growth-rate inputs, the Monte Carlo projection chart, its
//! summary and the sector split of the final projected year.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::config::{MAX_PROJECTION_YEARS, MIN_PROJECTION_YEARS};
use simulation::game_actions::{ActionQueue, ActionSource, TwinAction};
use simulation::projection::{GrowthFactor, ProjectionPoint, ProjectionState};

use crate::details_panel::category_color;
use crate::graphs::{draw_line_chart, share_bar};
use crate::theme::ACCENT;

/// Chart series and the first and last year labels.
pub(crate) fn chart_series(points: &[ProjectionPoint]) -> (Vec<f32>, String, String) {
    let data = points.iter().map(|p| p.emission as f32).collect();
    let first = points.first().map(|p| p.year.to_string()).unwrap_or_default();
    let last = points.last().map(|p| p.year.to_string()).unwrap_or_default();
    (data, first, last)
}

pub fn projection_panel_ui(
    mut contexts: EguiContexts,
    mut queue: ResMut<ActionQueue>,
    projection: Res<ProjectionState>,
) {
    egui::TopBottomPanel::bottom("projection_panel")
        .default_height(240.0)
        .resizable(true)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading("Emission Projection");
            ui.columns(3, |columns| {
                inputs_column(&mut columns[0], &mut queue, &projection);
                chart_column(&mut columns[1], &projection);
                summary_column(&mut columns[2], &projection);
            });
        });
}

fn inputs_column(ui: &mut egui::Ui, queue: &mut ActionQueue, projection: &ProjectionState) {
    for factor in GrowthFactor::ALL {
        let mut rate = projection.growth.get(factor);
        let slider = egui::Slider::new(&mut rate, 0.0..=factor.max_rate())
            .step_by(0.1)
            .suffix("%")
            .text(factor.label());
        if ui.add(slider).changed() {
            queue.push(
                ActionSource::Dashboard,
                TwinAction::SetGrowthRate { factor, rate },
            );
        }
    }

    ui.horizontal(|ui| {
        ui.label("Years");
        let mut years = projection.years;
        let field = egui::DragValue::new(&mut years).range(MIN_PROJECTION_YEARS..=MAX_PROJECTION_YEARS);
        if ui.add(field).changed() {
            queue.push(ActionSource::Dashboard, TwinAction::SetProjectionYears { years });
        }
        if ui.button("Run Projection").clicked() {
            queue.push(ActionSource::Dashboard, TwinAction::RunProjection);
        }
    });
}

fn chart_column(ui: &mut egui::Ui, projection: &ProjectionState) {
    if projection.results.is_empty() {
        ui.weak("Set growth rates and run a projection.");
        return;
    }
    let (data, first, last) = chart_series(&projection.results);
    let width = ui.available_width();
    draw_line_chart(
        ui,
        &data,
        ACCENT,
        egui::vec2(width, 150.0),
        (first.as_str(), last.as_str()),
    );
    ui.small(format!("Starting from {:.1} t/yr", projection.start_emission));
}

fn summary_column(ui: &mut egui::Ui, projection: &ProjectionState) {
    let Some(shares) = projection.sector_shares() else {
        return;
    };
    let summary = projection.summary();

    egui::Grid::new("projection_summary")
        .num_columns(2)
        .show(ui, |ui| {
            ui.label("Final year");
            ui.label(format!("{:.1} t/yr", summary.final_year_emission));
            ui.end_row();

            ui.label("Average growth");
            ui.label(format!("{:+.2}%", summary.average_growth_rate));
            ui.end_row();

            ui.label("Dominant sector");
            ui.label(
                summary
                    .dominant_sector
                    .map(|s| s.label())
                    .unwrap_or("-"),
            );
            ui.end_row();

            ui.label("Confidence");
            ui.label(format!("{:.0}%", summary.confidence_score));
            ui.end_row();
        });

    ui.add_space(4.0);
    let total: f64 = shares.iter().map(|s| s.emission).sum();
    for share in &shares {
        let fraction = if total > 0.0 {
            (share.emission / total) as f32
        } else {
            0.0
        };
        share_bar(
            ui,
            share.sector.label(),
            fraction,
            &format!("{:.1}", share.emission),
            category_color(share.sector),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_series_empty() {
        let (data, first, last) = chart_series(&[]);
        assert!(data.is_empty());
        assert!(first.is_empty());
        assert!(last.is_empty());
    }

    #[test]
    fn test_chart_series_labels_first_and_last_year() {
        let points = [
            ProjectionPoint {
                year: 2027,
                emission: 100.0,
            },
            ProjectionPoint {
                year: 2028,
                emission: 104.5,
            },
            ProjectionPoint {
                year: 2029,
                emission: 109.0,
            },
        ];
        let (data, first, last) = chart_series(&points);
        assert_eq!(data, vec![100.0, 104.5, 109.0]);
        assert_eq!(first, "2027");
        assert_eq!(last, "2029");
    }
}
