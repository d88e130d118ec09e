//! Transient toasts for the simulation's notices, stacked in the top-right
//! corner. Each notice is shown once and fades out after a few seconds.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::notices::{Notice, NoticeLevel, Notices};

/// Seconds a toast stays on screen.
const TOAST_SECS: f64 = 4.0;

/// Toasts shown at the same time.
const MAX_TOASTS: usize = 4;

fn level_color(level: NoticeLevel) -> egui::Color32 {
    match level {
        NoticeLevel::Success => egui::Color32::from_rgb(80, 220, 120),
        NoticeLevel::Info => egui::Color32::from_rgb(220, 220, 220),
        NoticeLevel::Error => egui::Color32::from_rgb(255, 90, 80),
    }
}

fn level_icon(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "[+]",
        NoticeLevel::Info => "[i]",
        NoticeLevel::Error => "[!]",
    }
}

#[derive(Default)]
pub struct ToastState {
    last_seq: Option<u64>,
    active: Vec<(Notice, f64)>,
}

impl ToastState {
    /// Pick up notices newer than the last one seen and drop expired toasts.
    fn update(&mut self, notices: &Notices, now: f64) {
        for notice in notices.recent(MAX_TOASTS) {
            if self.last_seq.is_some_and(|seq| notice.seq <= seq) {
                continue;
            }
            self.last_seq = Some(notice.seq);
            self.active.push((notice.clone(), now + TOAST_SECS));
        }
        self.active.retain(|(_, until)| *until > now);
        let excess = self.active.len().saturating_sub(MAX_TOASTS);
        self.active.drain(..excess);
    }
}

pub fn notice_toasts_ui(
    mut contexts: EguiContexts,
    notices: Res<Notices>,
    time: Res<Time>,
    mut state: Local<ToastState>,
) {
    let now = time.elapsed_secs_f64();
    state.update(&notices, now);
    if state.active.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("notice_toasts"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-340.0, 12.0))
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(contexts.ctx_mut(), |ui| {
            for (notice, until) in &state.active {
                let alpha = ((until - now) / 0.5).clamp(0.0, 1.0) as f32;
                egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(20, 24, 28, (230.0 * alpha) as u8))
                    .corner_radius(egui::CornerRadius::same(6))
                    .inner_margin(egui::Margin::symmetric(10, 6))
                    .show(ui, |ui| {
                        let color = level_color(notice.level).gamma_multiply(alpha);
                        ui.label(
                            egui::RichText::new(format!(
                                "{} {}",
                                level_icon(notice.level),
                                notice.text
                            ))
                            .color(color),
                        );
                    });
                ui.add_space(4.0);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notices_become_toasts_once() {
        let mut notices = Notices::default();
        notices.success("Prediction complete!");
        let mut state = ToastState::default();

        state.update(&notices, 0.0);
        assert_eq!(state.active.len(), 1);

        state.update(&notices, 1.0);
        assert_eq!(state.active.len(), 1);

        notices.error("Failed");
        state.update(&notices, 2.0);
        assert_eq!(state.active.len(), 2);
        assert_eq!(state.active[1].0.level, NoticeLevel::Error);
    }

    #[test]
    fn test_toasts_expire() {
        let mut notices = Notices::default();
        notices.info("Running prediction...");
        let mut state = ToastState::default();
        state.update(&notices, 10.0);
        state.update(&notices, 10.0 + TOAST_SECS + 0.1);
        assert!(state.active.is_empty());
    }

    #[test]
    fn test_toasts_capped() {
        let mut notices = Notices::default();
        for i in 0..10 {
            notices.info(format!("notice {i}"));
        }
        let mut state = ToastState::default();
        state.update(&notices, 0.0);
        assert_eq!(state.active.len(), MAX_TOASTS);
        assert_eq!(state.active[MAX_TOASTS - 1].0.text, "notice 9");
    }
}
