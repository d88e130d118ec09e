use bevy_egui::{egui, EguiContexts};

/// Accent used for headings and the selection highlight.
pub(crate) const ACCENT: egui::Color32 = egui::Color32::from_rgb(90, 200, 150);

pub fn apply_twin_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    // Dark slate background with a green accent
    let panel = egui::Color32::from_rgb(28, 34, 38);
    let inactive = egui::Color32::from_rgb(44, 54, 58);
    let hover = egui::Color32::from_rgb(60, 80, 78);

    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = ACCENT;

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;
    style.visuals.extreme_bg_color = egui::Color32::from_rgb(22, 26, 30);
    style.visuals.faint_bg_color = egui::Color32::from_rgb(34, 40, 44);

    style.visuals.selection.bg_fill = ACCENT.gamma_multiply(0.6);
    style.visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT);

    let rounding = egui::CornerRadius::same(6);
    style.visuals.window_corner_radius = egui::CornerRadius::same(8);
    style.visuals.widgets.noninteractive.corner_radius = rounding;
    style.visuals.widgets.inactive.corner_radius = rounding;
    style.visuals.widgets.hovered.corner_radius = rounding;
    style.visuals.widgets.active.corner_radius = rounding;

    style.spacing.slider_width = 150.0;

    ctx.set_style(style);
}
