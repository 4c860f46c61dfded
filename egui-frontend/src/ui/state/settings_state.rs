//! # Settings Form State
//!
//! Holds the settings page's local working copy. Toggles and selections
//! mutate only this copy; nothing reaches the stored settings until the
//! user hits Save.

use shared::UserSettings;

/// Local working copy of the user settings being edited.
#[derive(Debug, Clone)]
pub struct SettingsFormState {
    /// The copy the widgets bind to
    pub working: UserSettings,
    /// The settings as last loaded from the store, for dirty checks
    pub stored: UserSettings,
}

impl SettingsFormState {
    /// Start editing from the stored settings
    pub fn from_stored(stored: UserSettings) -> Self {
        Self {
            working: stored.clone(),
            stored,
        }
    }

    /// Whether the working copy differs from what the store last gave us
    pub fn is_dirty(&self) -> bool {
        self.working != self.stored
    }

    /// Called after a successful save: the working copy becomes the baseline
    pub fn mark_saved(&mut self) {
        self.stored = self.working.clone();
    }

    /// Discard edits and fall back to the stored settings
    pub fn reset(&mut self) {
        self.working = self.stored.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backend::domain::mappers;
    use backend::Backend;

    #[test]
    fn test_form_mutation_stays_local_until_save() {
        let backend = Backend::new();
        let stored = mappers::settings_to_dto(backend.settings_service.get_settings().unwrap());
        let mut form = SettingsFormState::from_stored(stored);

        // Toggle notifications off and back on without saving
        form.working.notifications_enabled = false;
        assert!(form.is_dirty());
        form.working.notifications_enabled = true;
        assert!(!form.is_dirty());

        // The store never saw either toggle
        let reread = backend.settings_service.get_settings().unwrap();
        assert!(reread.notifications_enabled);
    }

    #[test]
    fn test_mark_saved_updates_baseline() {
        let backend = Backend::new();
        let stored = mappers::settings_to_dto(backend.settings_service.get_settings().unwrap());
        let mut form = SettingsFormState::from_stored(stored);

        form.working.reminder_days = 10;
        assert!(form.is_dirty());
        form.mark_saved();
        assert!(!form.is_dirty());
    }

    #[test]
    fn test_reset_discards_edits() {
        let backend = Backend::new();
        let stored = mappers::settings_to_dto(backend.settings_service.get_settings().unwrap());
        let mut form = SettingsFormState::from_stored(stored.clone());

        form.working.dark_mode = !form.working.dark_mode;
        form.reset();
        assert_eq!(form.working, stored);
    }
}
