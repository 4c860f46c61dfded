//! # Stat Cards Module
//!
//! The row of headline statistics at the top of the dashboard: total
//! properties, total expenses, and rent income.

use eframe::egui;

use crate::ui::app_state::PropertyDashboardApp;
use crate::ui::components::styling;

struct StatCard {
    title: &'static str,
    value: String,
    footer: Option<&'static str>,
}

impl PropertyDashboardApp {
    pub fn render_stat_cards(&mut self, ui: &mut egui::Ui) {
        let Some(summary) = self.summary.clone() else {
            return;
        };

        let cards = [
            StatCard {
                title: "Total Properties",
                value: summary.total_properties.to_string(),
                footer: None,
            },
            StatCard {
                title: "Total Expenses",
                value: self.format_amount(summary.total_expenses),
                footer: None,
            },
            StatCard {
                title: "Rent Income",
                value: self.format_amount(summary.total_rent_income),
                footer: Some("Monthly recurring"),
            },
        ];

        ui.columns(cards.len(), |columns| {
            for (column, card) in columns.iter_mut().zip(cards) {
                styling::card_frame(column).show(column, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        egui::RichText::new(card.title)
                            .color(styling::muted_text_color(ui)),
                    );
                    ui.label(
                        egui::RichText::new(card.value)
                            .font(egui::FontId::new(22.0, egui::FontFamily::Proportional))
                            .strong(),
                    );
                    if let Some(footer) = card.footer {
                        ui.label(
                            egui::RichText::new(footer)
                                .small()
                                .color(styling::muted_text_color(ui)),
                        );
                    }
                });
            }
        });
    }
}
