//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use shared::ExpenseBreakdown;
use crate::domain::models::payment::Payment as DomainPayment;
use crate::domain::models::property::Property as DomainProperty;
use crate::domain::models::settings::UserSettings as DomainUserSettings;

/// Trait defining the interface for property storage operations
///
/// This trait abstracts away the specific storage implementation details,
/// allowing the domain layer to work with different storage backends
/// (in-memory fixtures today, a real store later) without modification.
///
/// Note: All operations are synchronous for the desktop-only egui app
pub trait PropertyStorage: Send + Sync {
    /// Retrieve a specific property by ID
    ///
    /// IDs are unique by convention; the first match wins. An unknown ID
    /// yields `Ok(None)`, never an error.
    fn get_property(&self, property_id: &str) -> Result<Option<DomainProperty>>;

    /// List all properties in insertion order
    fn list_properties(&self) -> Result<Vec<DomainProperty>>;
}

/// Trait defining the interface for payment storage operations
pub trait PaymentStorage: Send + Sync {
    /// Retrieve a specific payment by ID
    fn get_payment(&self, payment_id: &str) -> Result<Option<DomainPayment>>;

    /// List all payments in insertion order
    fn list_payments(&self) -> Result<Vec<DomainPayment>>;

    /// List payments referencing a property, in insertion order.
    /// No sort guarantee; an unknown property ID yields an empty list.
    fn list_payments_for_property(&self, property_id: &str) -> Result<Vec<DomainPayment>>;

    /// Aggregated monthly totals per expense category.
    ///
    /// Seeded alongside the payment fixtures: categories such as society
    /// and utility carry totals even when no payment rows fall inside the
    /// seed window.
    fn monthly_expense_breakdown(&self) -> Result<ExpenseBreakdown>;
}

/// Trait defining the interface for user settings storage operations
pub trait SettingsStorage: Send + Sync {
    /// Retrieve the stored user settings
    fn get_settings(&self) -> Result<DomainUserSettings>;

    /// Replace the stored user settings
    fn store_settings(&self, settings: &DomainUserSettings) -> Result<()>;
}

/// Trait defining the interface for storage connections
///
/// This trait abstracts away the specific connection type and provides
/// factory methods for creating repositories, so the domain layer can work
/// with any storage backend without knowing the implementation details.
pub trait Connection: Send + Sync + Clone {
    /// The type of PropertyStorage this connection creates
    type PropertyRepository: PropertyStorage + Clone;

    /// The type of PaymentStorage this connection creates
    type PaymentRepository: PaymentStorage + Clone;

    /// The type of SettingsStorage this connection creates
    type SettingsRepository: SettingsStorage + Clone;

    /// Create a new property repository for this connection
    fn create_property_repository(&self) -> Self::PropertyRepository;

    /// Create a new payment repository for this connection
    fn create_payment_repository(&self) -> Self::PaymentRepository;

    /// Create a new settings repository for this connection
    fn create_settings_repository(&self) -> Self::SettingsRepository;
}
