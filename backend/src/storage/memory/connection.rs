//! In-memory storage connection seeded with fixture data.

use std::sync::{Arc, RwLock};

use crate::storage::memory::fixtures::{self, FixtureData};
use crate::storage::memory::payment_repository::MemoryPaymentRepository;
use crate::storage::memory::property_repository::MemoryPropertyRepository;
use crate::storage::memory::settings_repository::MemorySettingsRepository;
use crate::storage::traits::Connection;

/// Connection over a shared in-memory data set.
///
/// Plays the role a database connection would in a real deployment: cloning
/// it is cheap and every repository created from a clone sees the same
/// underlying data.
#[derive(Clone)]
pub struct MemoryConnection {
    data: Arc<RwLock<FixtureData>>,
}

impl MemoryConnection {
    /// Create a connection seeded with the standard fixture set
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(fixtures::seed())),
        }
    }

    /// Create a connection over a custom data set
    pub fn with_data(data: FixtureData) -> Self {
        Self {
            data: Arc::new(RwLock::new(data)),
        }
    }

    pub(crate) fn data(&self) -> Arc<RwLock<FixtureData>> {
        self.data.clone()
    }
}

impl Default for MemoryConnection {
    fn default() -> Self {
        Self::new()
    }
}

impl Connection for MemoryConnection {
    type PropertyRepository = MemoryPropertyRepository;
    type PaymentRepository = MemoryPaymentRepository;
    type SettingsRepository = MemorySettingsRepository;

    fn create_property_repository(&self) -> Self::PropertyRepository {
        MemoryPropertyRepository::new(self.data())
    }

    fn create_payment_repository(&self) -> Self::PaymentRepository {
        MemoryPaymentRepository::new(self.data())
    }

    fn create_settings_repository(&self) -> Self::SettingsRepository {
        MemorySettingsRepository::new(self.data())
    }
}
