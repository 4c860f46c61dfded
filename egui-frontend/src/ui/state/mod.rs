pub mod settings_state;

pub use settings_state::SettingsFormState;
