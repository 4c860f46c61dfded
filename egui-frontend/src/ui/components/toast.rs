//! # Toast Module
//!
//! Transient notifications with a title, a description, and an optional
//! destructive variant for failures. A toast clears itself after a few
//! seconds; only one is shown at a time.

use std::time::{Duration, Instant};

use eframe::egui;

use crate::ui::app_state::PropertyDashboardApp;

const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Destructive,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
    created: Instant,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: ToastKind::Success,
            created: Instant::now(),
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: ToastKind::Destructive,
            created: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created.elapsed() >= TOAST_LIFETIME
    }
}

impl PropertyDashboardApp {
    /// Render the active toast (if any) anchored to the bottom-right corner
    pub fn render_toast(&mut self, ctx: &egui::Context) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }

        let Some(toast) = self.toast.clone() else {
            return;
        };

        // Keep repainting so the toast disappears without user input
        ctx.request_repaint_after(Duration::from_millis(250));

        let (accent, fill) = match toast.kind {
            ToastKind::Success => (
                egui::Color32::from_rgb(22, 163, 74),
                egui::Color32::from_rgb(240, 253, 244),
            ),
            ToastKind::Destructive => (
                egui::Color32::from_rgb(220, 38, 38),
                egui::Color32::from_rgb(254, 242, 242),
            ),
        };

        egui::Area::new(egui::Id::new("toast_area"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(fill)
                    .stroke(egui::Stroke::new(1.0, accent))
                    .rounding(egui::Rounding::same(6.0))
                    .inner_margin(egui::Margin::symmetric(14.0, 10.0))
                    .show(ui, |ui| {
                        ui.set_max_width(320.0);
                        ui.label(
                            egui::RichText::new(&toast.title)
                                .strong()
                                .color(accent),
                        );
                        ui.label(
                            egui::RichText::new(&toast.description)
                                .color(egui::Color32::from_rgb(60, 60, 60)),
                        );
                    });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_toast_is_not_expired() {
        let toast = Toast::success("Settings saved", "Your settings have been saved.");
        assert!(!toast.is_expired());
        assert_eq!(toast.kind, ToastKind::Success);
    }

    #[test]
    fn test_destructive_variant() {
        let toast = Toast::destructive("Sign in failed", "Please try again.");
        assert_eq!(toast.kind, ToastKind::Destructive);
    }
}
