//! # Backend for the property dashboard
//!
//! This backend provides direct access to domain services and storage for
//! the egui frontend:
//! - Uses synchronous operations (no async/await)
//! - Provides direct access to domain services
//! - Backed by an in-memory, fixture-seeded store behind repository traits

pub mod domain;
pub mod storage;

use std::sync::Arc;

pub use storage::MemoryConnection;

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub property_service: domain::PropertyService<MemoryConnection>,
    pub payment_service: domain::PaymentService<MemoryConnection>,
    pub dashboard_service: domain::DashboardService<MemoryConnection>,
    pub settings_service: domain::SettingsService<MemoryConnection>,
    pub backup_service: domain::BackupService,
}

impl Backend {
    /// Create a new backend instance over the fixture-seeded store
    pub fn new() -> Self {
        let connection = Arc::new(MemoryConnection::new());

        let property_service = domain::PropertyService::new(connection.clone());
        let payment_service = domain::PaymentService::new(connection.clone());
        let dashboard_service =
            domain::DashboardService::new(connection.clone(), payment_service.clone());
        let settings_service = domain::SettingsService::new(connection);
        let backup_service = domain::BackupService::new();

        Backend {
            property_service,
            payment_service,
            dashboard_service,
            settings_service,
            backup_service,
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_services_share_one_store() {
        let backend = Backend::new();

        // The dashboard's upcoming list and the payment service agree
        let summary = backend.dashboard_service.summary().unwrap();
        let upcoming = backend.payment_service.upcoming_payments(3).unwrap();
        assert_eq!(summary.upcoming_payments.len(), upcoming.len());

        // Settings written through the settings service are visible on re-read
        let mut settings = backend.settings_service.get_settings().unwrap();
        settings.notifications_enabled = false;
        backend.settings_service.save_settings(settings).unwrap();
        assert!(!backend
            .settings_service
            .get_settings()
            .unwrap()
            .notifications_enabled);
    }
}
