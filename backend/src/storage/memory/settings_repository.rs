//! In-memory user settings repository.

use std::sync::{Arc, RwLock};

use anyhow::{anyhow, Result};

use crate::domain::models::settings::UserSettings;
use crate::storage::memory::fixtures::FixtureData;
use crate::storage::traits::SettingsStorage;

#[derive(Clone)]
pub struct MemorySettingsRepository {
    data: Arc<RwLock<FixtureData>>,
}

impl MemorySettingsRepository {
    pub fn new(data: Arc<RwLock<FixtureData>>) -> Self {
        Self { data }
    }
}

impl SettingsStorage for MemorySettingsRepository {
    fn get_settings(&self) -> Result<UserSettings> {
        let data = self
            .data
            .read()
            .map_err(|_| anyhow!("settings store lock poisoned"))?;
        Ok(data.settings.clone())
    }

    fn store_settings(&self, settings: &UserSettings) -> Result<()> {
        let mut data = self
            .data
            .write()
            .map_err(|_| anyhow!("settings store lock poisoned"))?;
        data.settings = settings.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::connection::MemoryConnection;
    use crate::storage::traits::Connection;
    use shared::CurrencyCode;

    #[test]
    fn test_store_and_get_settings() {
        let connection = MemoryConnection::new();
        let repo = connection.create_settings_repository();

        let mut settings = repo.get_settings().unwrap();
        assert_eq!(settings.name, "John Doe");
        assert_eq!(settings.currency, CurrencyCode::Usd);

        settings.currency = CurrencyCode::Aed;
        settings.dark_mode = true;
        repo.store_settings(&settings).unwrap();

        // A repository from the same connection sees the update
        let other = connection.create_settings_repository();
        let stored = other.get_settings().unwrap();
        assert_eq!(stored.currency, CurrencyCode::Aed);
        assert!(stored.dark_mode);
    }
}
