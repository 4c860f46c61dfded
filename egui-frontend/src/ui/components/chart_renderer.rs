//! # Chart Renderer Module
//!
//! Bar charts for the dashboard: property portfolio by status and expenses
//! by category. Both take the chart-ready series the dashboard service
//! projects, so no further shaping happens here.

use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};

use shared::CategoryTotal;

use crate::ui::app_state::PropertyDashboardApp;
use crate::ui::components::styling;

impl PropertyDashboardApp {
    /// Render the two dashboard charts side by side
    pub fn render_charts(&mut self, ui: &mut egui::Ui) {
        let portfolio = self.portfolio_series.clone();
        let expenses = self.expense_series.clone();

        ui.columns(2, |columns| {
            styling::card_frame(&columns[0]).show(&mut columns[0], |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new("Property Portfolio").strong());
                ui.add_space(4.0);
                render_category_bars(
                    ui,
                    "portfolio_chart",
                    &portfolio,
                    egui::Color32::from_rgb(59, 130, 246),
                );
            });
            styling::card_frame(&columns[1]).show(&mut columns[1], |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new("Expenses by Category").strong());
                ui.add_space(4.0);
                render_category_bars(
                    ui,
                    "expense_chart",
                    &expenses,
                    egui::Color32::from_rgb(139, 92, 246),
                );
            });
        });
    }
}

/// Render a labeled bar chart: one bar per series entry, in series order
fn render_category_bars(
    ui: &mut egui::Ui,
    id: &str,
    series: &[CategoryTotal],
    color: egui::Color32,
) {
    if series.is_empty() {
        ui.label("No data to display");
        return;
    }

    let bars: Vec<Bar> = series
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            Bar::new(i as f64, entry.value)
                .name(&entry.label)
                .width(0.6)
        })
        .collect();
    let chart = BarChart::new(bars).color(color);

    let axis_labels: Vec<String> = series.iter().map(|e| e.label.clone()).collect();
    let tooltip_labels = axis_labels.clone();

    Plot::new(id)
        .height(220.0)
        .show_axes([true, true])
        .show_grid([false, true])
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .include_y(0.0)
        .x_axis_formatter(move |mark, _range| {
            // Only label whole bar positions
            let index = mark.value.round();
            if (mark.value - index).abs() > 0.001 || index < 0.0 {
                return String::new();
            }
            axis_labels
                .get(index as usize)
                .cloned()
                .unwrap_or_default()
        })
        .label_formatter(move |name, value| {
            if name.is_empty() {
                return String::new();
            }
            let index = value.x.round();
            let label = if index >= 0.0 {
                tooltip_labels.get(index as usize).cloned()
            } else {
                None
            };
            match label {
                Some(label) => format!("{}: {:.0}", label, value.y),
                None => format!("{:.0}", value.y),
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}
