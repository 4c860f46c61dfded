use eframe::egui;
use log::{error, info};

mod ui;

use ui::app_state::PropertyDashboardApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Property Dashboard egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Property Dashboard")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Property Dashboard",
        options,
        Box::new(|cc| match PropertyDashboardApp::new(cc) {
            Ok(app) => {
                info!("Successfully initialized Property Dashboard app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
