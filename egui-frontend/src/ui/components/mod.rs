//! UI components, each extending `PropertyDashboardApp` with render methods

pub mod chart_renderer;
pub mod dashboard;
pub mod header;
pub mod payment_cards;
pub mod settings_page;
pub mod stat_cards;
pub mod styling;
pub mod toast;
