//! # Header Module
//!
//! Renders the page header: title, subtitle, a greeting for the signed-in
//! user, and the Dashboard/Settings tab toggle.

use eframe::egui;

use crate::ui::app_state::{MainTab, PropertyDashboardApp};
use crate::ui::components::styling;

impl PropertyDashboardApp {
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                let title = match self.current_tab {
                    MainTab::Dashboard => "Property Dashboard",
                    MainTab::Settings => "Settings",
                };
                let subtitle = match self.current_tab {
                    MainTab::Dashboard => "Welcome back! Here's an overview of your properties.",
                    MainTab::Settings => "Manage your account and preferences",
                };

                ui.add(
                    egui::Label::new(
                        egui::RichText::new(title)
                            .font(egui::FontId::new(26.0, egui::FontFamily::Proportional))
                            .strong(),
                    )
                    .selectable(false),
                );
                ui.label(
                    egui::RichText::new(subtitle).color(styling::muted_text_color(ui)),
                );
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                self.render_tab_toggle(ui);
                ui.add_space(15.0);
                if let Some(user) = self.auth.current_user() {
                    ui.label(
                        egui::RichText::new(format!("Signed in as {}", user.greeting_name()))
                            .color(styling::muted_text_color(ui)),
                    );
                }
            });
        });
        ui.add_space(6.0);
        ui.separator();
        ui.add_space(6.0);
    }

    fn render_tab_toggle(&mut self, ui: &mut egui::Ui) {
        for (tab, label) in [
            (MainTab::Settings, "Settings"),
            (MainTab::Dashboard, "Dashboard"),
        ] {
            let selected = self.current_tab == tab;
            if ui.selectable_label(selected, label).clicked() && !selected {
                log::info!("Switching to {:?} tab", tab);
                self.current_tab = tab;
            }
        }
    }
}
