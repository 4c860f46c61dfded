//! Domain model for user settings.

use serde::{Deserialize, Serialize};
use shared::CurrencyCode;

/// Display preferences for the current user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub name: String,
    pub email: String,
    pub currency: CurrencyCode,
    pub dark_mode: bool,
    pub notifications_enabled: bool,
    /// Days before a due date to surface a reminder (1..=30 in the UI)
    pub reminder_days: u32,
}
