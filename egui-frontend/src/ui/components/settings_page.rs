//! # Settings Page Module
//!
//! The settings tab: account/auth section, profile fields, preferences
//! (currency, dark mode, notifications), and the data backup/restore
//! actions. Edits land in a local working copy and only reach the store
//! when the user hits Save.

use eframe::egui;

use backend::domain::mappers;
use shared::CurrencyCode;

use crate::ui::app_state::PropertyDashboardApp;
use crate::ui::components::styling;
use crate::ui::components::toast::Toast;

impl PropertyDashboardApp {
    pub fn render_settings_page(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.set_max_width(640.0);
                self.render_account_section(ui);
                ui.add_space(12.0);
                self.render_profile_section(ui);
                ui.add_space(12.0);
                self.render_preferences_section(ui);
                ui.add_space(12.0);
                self.render_data_section(ui);
                ui.add_space(12.0);
                self.render_save_row(ui);
            });
    }

    fn render_account_section(&mut self, ui: &mut egui::Ui) {
        styling::card_frame(ui).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("Account").strong());
            ui.add_space(4.0);

            if self.auth.is_loading() {
                ui.label(
                    egui::RichText::new("Checking session...")
                        .color(styling::muted_text_color(ui)),
                );
                return;
            }

            match self.auth.current_user() {
                Some(user) => {
                    ui.label(format!("Signed in as {}", user.greeting_name()));
                    ui.label(
                        egui::RichText::new(&user.email)
                            .small()
                            .color(styling::muted_text_color(ui)),
                    );
                    ui.add_space(4.0);
                    if ui.button("Sign Out").clicked() {
                        match self.auth.sign_out() {
                            Ok(()) => self.show_toast(Toast::success(
                                "Signed out",
                                "You have been signed out.",
                            )),
                            Err(err) => {
                                log::error!("Sign out failed: {err}");
                                self.show_toast(Toast::destructive(
                                    "Sign out failed",
                                    err.to_string(),
                                ));
                            }
                        }
                    }
                }
                None => {
                    ui.label(
                        egui::RichText::new("You are not signed in.")
                            .color(styling::muted_text_color(ui)),
                    );
                    ui.add_space(4.0);
                    if ui.button("Sign In").clicked() {
                        match self.auth.sign_in() {
                            Ok(user) => self.show_toast(Toast::success(
                                "Signed in",
                                format!("Welcome back, {}!", user.greeting_name()),
                            )),
                            Err(err) => {
                                log::error!("Sign in failed: {err}");
                                self.show_toast(Toast::destructive(
                                    "Sign in failed",
                                    err.to_string(),
                                ));
                            }
                        }
                    }
                }
            }
        });
    }

    fn render_profile_section(&mut self, ui: &mut egui::Ui) {
        styling::card_frame(ui).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("Profile").strong());
            ui.add_space(4.0);

            egui::Grid::new("profile_grid")
                .num_columns(2)
                .spacing([20.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Name");
                    ui.text_edit_singleline(&mut self.settings_form.working.name);
                    ui.end_row();

                    ui.label("Email");
                    ui.text_edit_singleline(&mut self.settings_form.working.email);
                    ui.end_row();
                });
        });
    }

    fn render_preferences_section(&mut self, ui: &mut egui::Ui) {
        styling::card_frame(ui).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("Preferences").strong());
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Currency");
                let selected = self.settings_form.working.currency;
                egui::ComboBox::from_id_source("currency_selector")
                    .selected_text(selected.label())
                    .show_ui(ui, |ui| {
                        for code in CurrencyCode::all() {
                            ui.selectable_value(
                                &mut self.settings_form.working.currency,
                                code,
                                code.label(),
                            );
                        }
                    });
            });

            ui.checkbox(&mut self.settings_form.working.dark_mode, "Dark mode");

            ui.checkbox(
                &mut self.settings_form.working.notifications_enabled,
                "Payment reminders",
            );
            if self.settings_form.working.notifications_enabled {
                ui.horizontal(|ui| {
                    ui.label("Remind me");
                    ui.add(
                        egui::DragValue::new(&mut self.settings_form.working.reminder_days)
                            .range(1..=30),
                    );
                    ui.label("days before a due date");
                });
            }
        });
    }

    fn render_data_section(&mut self, ui: &mut egui::Ui) {
        styling::card_frame(ui).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("Data").strong());
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                if ui.button("Backup Data").clicked() {
                    match self.backend.backup_service.backup_data() {
                        Ok(response) => self
                            .show_toast(Toast::success("Backup complete", response.success_message)),
                        Err(err) => {
                            log::error!("Backup failed: {err:#}");
                            self.show_toast(Toast::destructive(
                                "Backup failed",
                                "Could not back up your data.",
                            ));
                        }
                    }
                }
                if ui.button("Restore Data").clicked() {
                    match self.backend.backup_service.restore_data() {
                        Ok(response) => self.show_toast(Toast::success(
                            "Restore complete",
                            response.success_message,
                        )),
                        Err(err) => {
                            log::error!("Restore failed: {err:#}");
                            self.show_toast(Toast::destructive(
                                "Restore failed",
                                "Could not restore your data.",
                            ));
                        }
                    }
                }
            });
        });
    }

    fn render_save_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let dirty = self.settings_form.is_dirty();
            if ui
                .add_enabled(dirty, egui::Button::new("Save Settings"))
                .clicked()
            {
                self.save_settings();
            }
            if ui.add_enabled(dirty, egui::Button::new("Discard Changes")).clicked() {
                self.settings_form.reset();
            }
            if dirty {
                ui.label(
                    egui::RichText::new("Unsaved changes")
                        .small()
                        .color(styling::muted_text_color(ui)),
                );
            }
        });
    }

    fn save_settings(&mut self) {
        let settings = mappers::settings_from_dto(self.settings_form.working.clone());
        match self.backend.settings_service.save_settings(settings) {
            Ok(response) => {
                self.settings_form.mark_saved();
                self.display_currency = response.settings.currency;
                self.show_toast(Toast::success("Settings saved", response.success_message));
            }
            Err(err) => {
                log::error!("Failed to save settings: {err:#}");
                self.show_toast(Toast::destructive(
                    "Save failed",
                    "Your settings could not be saved.",
                ));
            }
        }
    }
}
