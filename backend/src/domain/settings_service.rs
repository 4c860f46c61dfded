//! User settings service.
//!
//! Reads and replaces the stored user settings. There is deliberately no
//! partial-update path: the UI edits a local copy and hands the whole thing
//! back on save.

use anyhow::Result;
use log::info;
use std::sync::Arc;

use shared::SaveSettingsResponse;

use crate::domain::mappers;
use crate::domain::models::settings::UserSettings;
use crate::storage::{Connection, SettingsStorage};

#[derive(Clone)]
pub struct SettingsService<C: Connection> {
    settings_repository: C::SettingsRepository,
}

impl<C: Connection> SettingsService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        let settings_repository = connection.create_settings_repository();
        Self {
            settings_repository,
        }
    }

    /// The currently stored settings
    pub fn get_settings(&self) -> Result<UserSettings> {
        self.settings_repository.get_settings()
    }

    /// Replace the stored settings and confirm
    pub fn save_settings(&self, settings: UserSettings) -> Result<SaveSettingsResponse> {
        self.settings_repository.store_settings(&settings)?;
        info!("Saved user settings for {}", settings.name);

        Ok(SaveSettingsResponse {
            settings: mappers::settings_to_dto(settings),
            success_message: "Your settings have been saved successfully.".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryConnection;
    use shared::CurrencyCode;

    #[test]
    fn test_save_settings_round_trip() {
        let connection = Arc::new(MemoryConnection::new());
        let service = SettingsService::new(connection);

        let mut settings = service.get_settings().unwrap();
        settings.currency = CurrencyCode::Inr;
        settings.reminder_days = 7;

        let response = service.save_settings(settings.clone()).unwrap();
        assert_eq!(response.settings.currency, CurrencyCode::Inr);
        assert!(!response.success_message.is_empty());

        let stored = service.get_settings().unwrap();
        assert_eq!(stored, settings);
    }
}
