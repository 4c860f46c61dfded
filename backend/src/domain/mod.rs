//! Domain layer: models plus the services the UI calls.

pub mod auth;
pub mod backup_service;
pub mod currency;
pub mod dashboard_service;
pub mod mappers;
pub mod models;
pub mod payment_service;
pub mod property_service;
pub mod settings_service;

pub use auth::{AuthError, AuthProvider, StubAuthProvider};
pub use backup_service::BackupService;
pub use dashboard_service::DashboardService;
pub use payment_service::PaymentService;
pub use property_service::PropertyService;
pub use settings_service::SettingsService;
