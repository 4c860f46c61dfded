//! # Payment Cards Module
//!
//! The "Upcoming Payments" section: one card per payment the dashboard
//! service surfaced, with the property name, due date, amount, and status.

use eframe::egui;

use shared::Payment;

use crate::ui::app_state::PropertyDashboardApp;
use crate::ui::components::styling;

impl PropertyDashboardApp {
    pub fn render_upcoming_payments(&mut self, ui: &mut egui::Ui) {
        let payments: Vec<Payment> = self
            .summary
            .as_ref()
            .map(|s| s.upcoming_payments.clone())
            .unwrap_or_default();

        ui.label(egui::RichText::new("Upcoming Payments").strong());
        ui.add_space(4.0);

        if payments.is_empty() {
            styling::card_frame(ui).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    egui::RichText::new("No upcoming payments")
                        .color(styling::muted_text_color(ui)),
                );
            });
            return;
        }

        for payment in payments {
            self.render_payment_card(ui, &payment);
            ui.add_space(6.0);
        }
    }

    fn render_payment_card(&mut self, ui: &mut egui::Ui, payment: &Payment) {
        let property_name = self.property_name(&payment.property_id);
        let description = payment
            .notes
            .clone()
            .unwrap_or_else(|| payment.payment_type.key().to_string());
        let due = payment.due_date.format("%b %d, %Y").to_string();
        let amount = self.format_amount(payment.amount);

        styling::card_frame(ui).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(property_name).strong());
                    ui.label(
                        egui::RichText::new(description)
                            .small()
                            .color(styling::muted_text_color(ui)),
                    );
                    ui.label(
                        egui::RichText::new(format!("Due {}", due))
                            .small()
                            .color(styling::muted_text_color(ui)),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.vertical(|ui| {
                        ui.with_layout(
                            egui::Layout::top_down(egui::Align::Max),
                            |ui| {
                                ui.label(egui::RichText::new(amount).strong());
                                ui.label(
                                    egui::RichText::new(payment.status.label())
                                        .small()
                                        .color(egui::Color32::from_rgb(202, 138, 4)),
                                );
                            },
                        );
                    });
                });
            });
        });
    }
}
