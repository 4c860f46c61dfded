//! # App State Module
//!
//! This module defines the central application state structure and
//! initialization logic for the property dashboard app.
//!
//! ## Key Types:
//! - `MainTab` - Enum defining available tabs (Dashboard, Settings)
//! - `PropertyDashboardApp` - Main application state struct
//!
//! ## State Management:
//! The PropertyDashboardApp struct holds all application state in a single
//! location, making it easy to manage and pass between different UI
//! components. The backend and the authentication provider are explicit
//! constructor dependencies rather than ambient globals.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use log::info;

use backend::domain::currency::format_currency;
use backend::domain::mappers;
use backend::domain::{AuthProvider, StubAuthProvider};
use backend::Backend;
use shared::{CategoryTotal, CurrencyCode, DashboardSummary};

use crate::ui::components::toast::Toast;
use crate::ui::state::SettingsFormState;

/// Tabs available in the main interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainTab {
    Dashboard,
    Settings,
}

/// Main application struct for the egui property dashboard
pub struct PropertyDashboardApp {
    pub backend: Backend,
    pub auth: Arc<dyn AuthProvider>,

    // UI state
    pub current_tab: MainTab,
    pub toast: Option<Toast>,

    // Dashboard state
    pub summary: Option<DashboardSummary>,
    pub expense_series: Vec<CategoryTotal>,
    pub portfolio_series: Vec<CategoryTotal>,
    /// Property id -> display name, for the payment cards
    pub property_names: HashMap<String, String>,

    // Settings state
    pub settings_form: SettingsFormState,
    /// Currency of the last-saved settings; the dashboard formats with this
    pub display_currency: CurrencyCode,
}

impl PropertyDashboardApp {
    /// Create a new app instance with the default stub auth provider
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self> {
        Self::with_auth(cc, Arc::new(StubAuthProvider::new()))
    }

    /// Create a new app instance with an explicit auth provider
    pub fn with_auth(
        _cc: &eframe::CreationContext<'_>,
        auth: Arc<dyn AuthProvider>,
    ) -> Result<Self> {
        info!("Initializing PropertyDashboardApp");

        let backend = Backend::new();

        let stored_settings =
            mappers::settings_to_dto(backend.settings_service.get_settings()?);
        let display_currency = stored_settings.currency;
        let settings_form = SettingsFormState::from_stored(stored_settings);

        let mut app = Self {
            backend,
            auth,
            current_tab: MainTab::Dashboard,
            toast: None,
            summary: None,
            expense_series: Vec::new(),
            portfolio_series: Vec::new(),
            property_names: HashMap::new(),
            settings_form,
            display_currency,
        };
        app.load_dashboard_data()?;
        Ok(app)
    }

    /// Load (or reload) everything the dashboard tab renders
    pub fn load_dashboard_data(&mut self) -> Result<()> {
        let summary = self.backend.dashboard_service.summary()?;
        self.expense_series = self.backend.dashboard_service.expense_chart_series()?;
        self.portfolio_series = self.backend.dashboard_service.portfolio_chart_series()?;

        self.property_names = self
            .backend
            .property_service
            .list_properties()?
            .into_iter()
            .map(|p| (p.id, p.name))
            .collect();

        info!(
            "Loaded dashboard data: {} properties, {} upcoming payments",
            summary.total_properties,
            summary.upcoming_payments.len()
        );
        self.summary = Some(summary);
        Ok(())
    }

    /// Format an amount in the saved display currency
    pub fn format_amount(&self, amount: f64) -> String {
        format_currency(amount, self.display_currency)
    }

    /// Display name for a payment's property, falling back to the raw id.
    /// A dangling reference just degrades to the id; it is not an error.
    pub fn property_name(&self, property_id: &str) -> String {
        self.property_names
            .get(property_id)
            .cloned()
            .unwrap_or_else(|| property_id.to_string())
    }

    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }
}
