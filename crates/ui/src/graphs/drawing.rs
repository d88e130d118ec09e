//! Shared drawing helpers: line charts, heat colours, share bars and legend
//! items.

use bevy_egui::egui;

/// Line chart with horizontal guide lines, point markers and the first and
/// last x-axis labels in the bottom corners.
pub(crate) fn draw_line_chart(
    ui: &mut egui::Ui,
    data: &[f32],
    color: egui::Color32,
    size: egui::Vec2,
    x_labels: (&str, &str),
) {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 2.0, egui::Color32::from_gray(30));

    for i in 0..=4 {
        let y = rect.min.y + (i as f32 / 4.0) * rect.height();
        painter.line_segment(
            [egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
            egui::Stroke::new(0.3, egui::Color32::from_gray(50)),
        );
    }

    if data.is_empty() {
        return;
    }

    let min_val = data.iter().cloned().fold(f32::INFINITY, f32::min);
    let max_val = data.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let range = (max_val - min_val).max(1.0);

    // Leave room for the axis labels
    let plot = rect.shrink2(egui::vec2(8.0, 14.0));
    let points: Vec<egui::Pos2> = data
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let t = if data.len() > 1 {
                i as f32 / (data.len() - 1) as f32
            } else {
                0.5
            };
            let x = plot.min.x + t * plot.width();
            let y = plot.max.y - ((v - min_val) / range) * plot.height();
            egui::pos2(x, y)
        })
        .collect();

    for window in points.windows(2) {
        painter.line_segment([window[0], window[1]], egui::Stroke::new(1.5, color));
    }
    for point in &points {
        painter.circle_filled(*point, 2.5, color);
    }

    let label_color = egui::Color32::from_gray(160);
    let font = egui::FontId::proportional(10.0);
    painter.text(
        rect.left_bottom() + egui::vec2(4.0, -2.0),
        egui::Align2::LEFT_BOTTOM,
        x_labels.0,
        font.clone(),
        label_color,
    );
    painter.text(
        rect.right_bottom() + egui::vec2(-4.0, -2.0),
        egui::Align2::RIGHT_BOTTOM,
        x_labels.1,
        font.clone(),
        label_color,
    );
    painter.text(
        rect.left_top() + egui::vec2(4.0, 2.0),
        egui::Align2::LEFT_TOP,
        format!("{max_val:.0}"),
        font,
        label_color,
    );
}

/// Green through yellow to red for a level in `0..=1`.
pub(crate) fn emission_color(level: f32) -> egui::Color32 {
    let t = level.clamp(0.0, 1.0);
    if t < 0.5 {
        let ratio = t * 2.0;
        egui::Color32::from_rgb((ratio * 255.0) as u8, 200, ((1.0 - ratio) * 100.0) as u8)
    } else {
        let ratio = (t - 0.5) * 2.0;
        egui::Color32::from_rgb(255, ((1.0 - ratio) * 200.0) as u8, 0)
    }
}

/// Labelled horizontal bar filled to `fraction` of its width.
pub(crate) fn share_bar(
    ui: &mut egui::Ui,
    label: &str,
    fraction: f32,
    value_text: &str,
    color: egui::Color32,
) {
    ui.horizontal(|ui| {
        ui.add_sized([84.0, 14.0], egui::Label::new(label));
        let (rect, _) = ui.allocate_exact_size(egui::vec2(110.0, 12.0), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 2.0, egui::Color32::from_gray(40));
        let fill_rect = egui::Rect::from_min_size(
            rect.min,
            egui::vec2(rect.width() * fraction.clamp(0.0, 1.0), rect.height()),
        );
        painter.rect_filled(fill_rect, 2.0, color);
        ui.label(value_text);
    });
}

pub(crate) fn legend_item(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 1.0, color);
    ui.label(text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emission_color_endpoints() {
        assert_eq!(emission_color(0.0), egui::Color32::from_rgb(0, 200, 100));
        assert_eq!(emission_color(1.0), egui::Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn test_emission_color_clamps_out_of_range() {
        assert_eq!(emission_color(-3.0), emission_color(0.0));
        assert_eq!(emission_color(7.5), emission_color(1.0));
    }

    #[test]
    fn test_emission_color_midpoint_is_yellow() {
        let mid = emission_color(0.5);
        assert_eq!(mid.r(), 255);
        assert_eq!(mid.g(), 200);
        assert_eq!(mid.b(), 0);
    }
}
