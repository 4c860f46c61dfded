//! Domain model for a property.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

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

/// Occupancy status of a property.
///
/// The financial fields that only make sense for a given status live inside
/// the corresponding variant, so a rented property cannot carry a purchase
/// date and an owned one cannot carry lease dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyStatus {
    Rented {
        rented_since: NaiveDate,
        lease_end: NaiveDate,
        monthly_rent: f64,
    },
    Owned {
        purchase_date: NaiveDate,
        down_payment: f64,
        initial_value: Option<f64>,
    },
    Construction {
        down_payment: Option<f64>,
        notes: Option<String>,
    },
}

/// A document attached to a property
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

/// Domain model representing a property in the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub size: u32,
    pub size_unit: SizeUnit,
    pub kind: PropertyKind,
    pub status: PropertyStatus,
    pub current_value: f64,
    pub tags: Vec<String>,
    pub primary_image: String,
    pub images: Vec<String>,
    pub documents: Vec<PropertyDocument>,
}

impl Property {
    /// Monthly rent when the property is rented out, 0 otherwise
    pub fn monthly_rent(&self) -> f64 {
        match &self.status {
            PropertyStatus::Rented { monthly_rent, .. } => *monthly_rent,
            _ => 0.0,
        }
    }

    pub fn is_rented(&self) -> bool {
        matches!(self.status, PropertyStatus::Rented { .. })
    }

    pub fn is_owned(&self) -> bool {
        matches!(self.status, PropertyStatus::Owned { .. })
    }

    pub fn is_under_construction(&self) -> bool {
        matches!(self.status, PropertyStatus::Construction { .. })
    }
}
