//! # Styling Module
//!
//! Shared look-and-feel helpers: theme application and the card frame every
//! dashboard section sits in.

use eframe::egui;

/// Apply the current theme to the whole context. Called every frame so a
/// dark-mode toggle takes effect immediately.
pub fn apply_theme(ctx: &egui::Context, dark_mode: bool) {
    let mut visuals = if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    visuals.window_rounding = egui::Rounding::same(8.0);
    visuals.widgets.noninteractive.rounding = egui::Rounding::same(6.0);
    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    ctx.set_style(style);
}

/// Card frame used by stat cards, charts, and payment rows
pub fn card_frame(ui: &egui::Ui) -> egui::Frame {
    egui::Frame::none()
        .fill(ui.visuals().panel_fill)
        .stroke(egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(14.0))
}

/// Muted color for secondary text, theme-aware
pub fn muted_text_color(ui: &egui::Ui) -> egui::Color32 {
    ui.visuals().weak_text_color()
}
