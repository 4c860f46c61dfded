use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

/// A property in the portfolio.
///
/// Status-conditioned financial fields live inside [`PropertyStatus`] so a
/// record can only carry the fields that match its status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    /// Floor area in `size_unit` units
    pub size: u32,
    pub size_unit: SizeUnit,
    pub kind: PropertyKind,
    pub status: PropertyStatus,
    /// Current estimated market value
    pub current_value: f64,
    pub tags: Vec<String>,
    pub primary_image: String,
    pub images: Vec<String>,
    pub documents: Vec<PropertyDocument>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeUnit {
    SquareFeet,
    SquareMeters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyKind {
    Apartment,
    Villa,
    House,
    Commercial,
    Land,
}

/// Occupancy status of a property, carrying the financial fields that only
/// make sense for that status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyStatus {
    /// Rented out to a tenant
    Rented {
        rented_since: NaiveDate,
        lease_end: NaiveDate,
        monthly_rent: f64,
    },
    /// Owner-occupied or held outright
    Owned {
        purchase_date: NaiveDate,
        down_payment: f64,
        initial_value: Option<f64>,
    },
    /// Under construction, not yet handed over
    Construction {
        down_payment: Option<f64>,
        notes: Option<String>,
    },
}

impl PropertyStatus {
    /// Display label for the status
    pub fn label(&self) -> &'static str {
        match self {
            PropertyStatus::Rented { .. } => "Rented",
            PropertyStatus::Owned { .. } => "Owned",
            PropertyStatus::Construction { .. } => "Construction",
        }
    }
}

/// A document attached to a property (deed, agreement, tax receipt, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDocument {
    pub id: String,
    pub name: String,
    pub kind: DocumentKind,
    pub url: String,
    pub upload_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    Agreement,
    Deed,
    Tax,
    Other,
}

/// A payment associated with a property.
///
/// The property reference is a weak reference by id; a payment whose
/// `property_id` matches no property is not an error, it just renders
/// nowhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub property_id: String,
    pub amount: f64,
    pub payment_type: PaymentType,
    pub status: PaymentStatus,
    pub due_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub mode: Option<PaymentMode>,
    pub recurring: bool,
    /// Present when `recurring` is true
    pub frequency: Option<PaymentFrequency>,
    pub notes: Option<String>,
    pub receipt_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentType {
    Rent,
    Emi,
    Maintenance,
    Tax,
    Society,
    Utility,
    Other,
}

impl PaymentType {
    /// Lowercase category key, matching the expense breakdown keys
    pub fn key(&self) -> &'static str {
        match self {
            PaymentType::Rent => "rent",
            PaymentType::Emi => "emi",
            PaymentType::Maintenance => "maintenance",
            PaymentType::Tax => "tax",
            PaymentType::Society => "society",
            PaymentType::Utility => "utility",
            PaymentType::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Upcoming,
    Overdue,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Upcoming => "Upcoming",
            PaymentStatus::Overdue => "Overdue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMode {
    Bank,
    Card,
    Cash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentFrequency {
    Monthly,
    Quarterly,
    Yearly,
}

/// Monthly expense totals per category.
///
/// The category set is fixed; `entries()` iterates it in declaration order
/// so chart projections are deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseBreakdown {
    pub rent: f64,
    pub emi: f64,
    pub maintenance: f64,
    pub tax: f64,
    pub society: f64,
    pub utility: f64,
    pub other: f64,
}

impl ExpenseBreakdown {
    /// Category keys paired with their totals, in declaration order
    pub fn entries(&self) -> [(PaymentType, f64); 7] {
        [
            (PaymentType::Rent, self.rent),
            (PaymentType::Emi, self.emi),
            (PaymentType::Maintenance, self.maintenance),
            (PaymentType::Tax, self.tax),
            (PaymentType::Society, self.society),
            (PaymentType::Utility, self.utility),
            (PaymentType::Other, self.other),
        ]
    }

    /// Sum over all categories
    pub fn total(&self) -> f64 {
        self.entries().iter().map(|(_, v)| v).sum()
    }
}

/// One row of a chart series: display label plus value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub label: String,
    pub value: f64,
}

/// Aggregate dashboard view over the property and payment collections.
///
/// Computed on demand by the dashboard service; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_properties: usize,
    pub rented_properties: usize,
    pub owned_properties: usize,
    pub construction_properties: usize,
    pub total_expenses: f64,
    pub total_rent_income: f64,
    pub upcoming_payments: Vec<Payment>,
    pub monthly_expense_breakdown: ExpenseBreakdown,
}

/// User display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub name: String,
    pub email: String,
    pub currency: CurrencyCode,
    pub dark_mode: bool,
    pub notifications_enabled: bool,
    /// Days before a due date to surface a reminder
    pub reminder_days: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    Usd,
    Aed,
    Eur,
    Gbp,
    Inr,
}

impl CurrencyCode {
    pub fn symbol(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "$",
            CurrencyCode::Aed => "AED ",
            CurrencyCode::Eur => "€",
            CurrencyCode::Gbp => "£",
            CurrencyCode::Inr => "₹",
        }
    }

    /// Label for the settings currency selector
    pub fn label(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "US Dollar ($)",
            CurrencyCode::Aed => "UAE Dirham (AED)",
            CurrencyCode::Eur => "Euro (€)",
            CurrencyCode::Gbp => "British Pound (£)",
            CurrencyCode::Inr => "Indian Rupee (₹)",
        }
    }

    /// All selectable currencies, in selector order
    pub fn all() -> [CurrencyCode; 5] {
        [
            CurrencyCode::Usd,
            CurrencyCode::Aed,
            CurrencyCode::Eur,
            CurrencyCode::Gbp,
            CurrencyCode::Inr,
        ]
    }
}

/// User object surfaced by the external authentication collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub display_name: Option<String>,
    pub email: String,
    pub avatar_url: Option<String>,
}

impl AuthUser {
    /// Name to greet the user by: display name when present, email otherwise
    pub fn greeting_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

/// Response after saving settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveSettingsResponse {
    pub settings: UserSettings,
    pub success_message: String,
}

/// Response after a backup request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupDataResponse {
    pub success_message: String,
}

/// Response after a restore request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestoreDataResponse {
    pub success_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_entries_order_and_total() {
        let breakdown = ExpenseBreakdown {
            rent: 0.0,
            emi: 38400.0,
            maintenance: 1800.0,
            tax: 1200.0,
            society: 900.0,
            utility: 650.0,
            other: 50000.0,
        };

        let entries = breakdown.entries();
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0], (PaymentType::Rent, 0.0));
        assert_eq!(entries[1], (PaymentType::Emi, 38400.0));
        assert_eq!(entries[6], (PaymentType::Other, 50000.0));
        assert_eq!(breakdown.total(), 92950.0);
    }

    #[test]
    fn test_payment_type_keys_are_lowercase() {
        let types = [
            PaymentType::Rent,
            PaymentType::Emi,
            PaymentType::Maintenance,
            PaymentType::Tax,
            PaymentType::Society,
            PaymentType::Utility,
            PaymentType::Other,
        ];
        for t in types {
            assert_eq!(t.key(), t.key().to_lowercase());
        }
    }

    #[test]
    fn test_auth_user_greeting_name() {
        let with_name = AuthUser {
            display_name: Some("John Doe".to_string()),
            email: "john.doe@example.com".to_string(),
            avatar_url: None,
        };
        assert_eq!(with_name.greeting_name(), "John Doe");

        let without_name = AuthUser {
            display_name: None,
            email: "john.doe@example.com".to_string(),
            avatar_url: None,
        };
        assert_eq!(without_name.greeting_name(), "john.doe@example.com");
    }

    #[test]
    fn test_property_status_serde_round_trip() {
        let status = PropertyStatus::Rented {
            rented_since: NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(),
            lease_end: NaiveDate::from_ymd_opt(2023, 5, 31).unwrap(),
            monthly_rent: 2500.0,
        };
        let json = serde_json::to_string(&status).unwrap();
        let parsed: PropertyStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, status);
    }
}
