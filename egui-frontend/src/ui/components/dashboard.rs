//! # Dashboard Module
//!
//! Layout for the dashboard tab: stat cards on top, the two charts in the
//! middle, upcoming payments underneath.

use eframe::egui;

use crate::ui::app_state::PropertyDashboardApp;

impl PropertyDashboardApp {
    pub fn render_dashboard(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.render_stat_cards(ui);
                ui.add_space(12.0);
                self.render_charts(ui);
                ui.add_space(12.0);
                self.render_upcoming_payments(ui);
            });
    }
}
