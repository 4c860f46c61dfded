//! Domain model for a payment.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Upcoming,
    Overdue,
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

/// Domain model representing a payment against a property.
///
/// `property_id` is a weak reference: it is not validated against the
/// property collection, and a dangling reference just means the payment
/// renders nowhere.
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
    pub frequency: Option<PaymentFrequency>,
    pub notes: Option<String>,
    pub receipt_url: Option<String>,
}

impl Payment {
    pub fn is_upcoming(&self) -> bool {
        self.status == PaymentStatus::Upcoming
    }
}
