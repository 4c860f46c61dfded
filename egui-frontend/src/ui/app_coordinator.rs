//! # App Coordinator Module
//!
//! The eframe update loop: applies the theme, renders the header, then
//! hands off to whichever tab is active. Toasts draw last so they sit on
//! top of everything.

use eframe::egui;

use crate::ui::app_state::{MainTab, PropertyDashboardApp};
use crate::ui::components::styling;

impl eframe::App for PropertyDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        styling::apply_theme(ctx, self.settings_form.working.dark_mode);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(ui);
            match self.current_tab {
                MainTab::Dashboard => self.render_dashboard(ui),
                MainTab::Settings => self.render_settings_page(ui),
            }
        });

        self.render_toast(ctx);
    }
}
