//! Seed data for the in-memory store.
//!
//! These records stand in for a real data source: three properties in
//! different occupancy states and the payment history attached to them,
//! plus the monthly expense breakdown and the default user preferences.

use chrono::NaiveDate;
use shared::{CurrencyCode, ExpenseBreakdown};

use crate::domain::models::payment::{
    Payment, PaymentFrequency, PaymentMode, PaymentStatus, PaymentType,
};
use crate::domain::models::property::{
    DocumentKind, Property, PropertyDocument, PropertyKind, PropertyStatus, SizeUnit,
};
use crate::domain::models::settings::UserSettings;

/// Everything the in-memory store is seeded with.
#[derive(Debug, Clone)]
pub struct FixtureData {
    pub properties: Vec<Property>,
    pub payments: Vec<Payment>,
    pub monthly_expense_breakdown: ExpenseBreakdown,
    pub settings: UserSettings,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

pub fn seed_properties() -> Vec<Property> {
    vec![
        Property {
            id: "prop-1".to_string(),
            name: "Sunset Apartment".to_string(),
            address: "123 Maple Street".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            zip: "94107".to_string(),
            size: 1200,
            size_unit: SizeUnit::SquareFeet,
            kind: PropertyKind::Apartment,
            status: PropertyStatus::Rented {
                rented_since: date(2022, 6, 1),
                lease_end: date(2023, 5, 31),
                monthly_rent: 2500.0,
            },
            current_value: 950_000.0,
            tags: vec!["investment".to_string(), "long-term".to_string()],
            primary_image: "/assets/property-1.jpg".to_string(),
            images: vec![
                "/assets/property-1.jpg".to_string(),
                "/assets/property-1-interior.jpg".to_string(),
            ],
            documents: vec![PropertyDocument {
                id: "doc-1".to_string(),
                name: "Rental Agreement".to_string(),
                kind: DocumentKind::Agreement,
                url: "/assets/docs/rental-agreement.pdf".to_string(),
                upload_date: date(2022, 5, 25),
            }],
        },
        Property {
            id: "prop-2".to_string(),
            name: "Highland Villa".to_string(),
            address: "456 Oak Avenue".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            zip: "78701".to_string(),
            size: 2800,
            size_unit: SizeUnit::SquareFeet,
            kind: PropertyKind::Villa,
            status: PropertyStatus::Owned {
                purchase_date: date(2020, 3, 15),
                down_payment: 150_000.0,
                initial_value: Some(680_000.0),
            },
            current_value: 750_000.0,
            tags: vec!["primary".to_string(), "residential".to_string()],
            primary_image: "/assets/property-2.jpg".to_string(),
            images: vec![
                "/assets/property-2.jpg".to_string(),
                "/assets/property-2-backyard.jpg".to_string(),
            ],
            documents: vec![
                PropertyDocument {
                    id: "doc-2".to_string(),
                    name: "Sale Deed".to_string(),
                    kind: DocumentKind::Deed,
                    url: "/assets/docs/sale-deed.pdf".to_string(),
                    upload_date: date(2020, 3, 20),
                },
                PropertyDocument {
                    id: "doc-3".to_string(),
                    name: "Property Tax Receipt".to_string(),
                    kind: DocumentKind::Tax,
                    url: "/assets/docs/tax-receipt.pdf".to_string(),
                    upload_date: date(2023, 1, 5),
                },
            ],
        },
        Property {
            id: "prop-3".to_string(),
            name: "Downtown Loft".to_string(),
            address: "789 Pine Street".to_string(),
            city: "Seattle".to_string(),
            state: "WA".to_string(),
            zip: "98101".to_string(),
            size: 950,
            size_unit: SizeUnit::SquareFeet,
            kind: PropertyKind::Apartment,
            status: PropertyStatus::Construction {
                down_payment: Some(110_000.0),
                notes: Some("Completion expected by December 2023".to_string()),
            },
            current_value: 550_000.0,
            tags: vec!["investment".to_string(), "upcoming".to_string()],
            primary_image: "/assets/property-3.jpg".to_string(),
            images: vec![
                "/assets/property-3.jpg".to_string(),
                "/assets/property-3-plan.jpg".to_string(),
            ],
            documents: vec![PropertyDocument {
                id: "doc-4".to_string(),
                name: "Purchase Agreement".to_string(),
                kind: DocumentKind::Agreement,
                url: "/assets/docs/purchase-agreement.pdf".to_string(),
                upload_date: date(2022, 11, 10),
            }],
        },
    ]
}

pub fn seed_payments() -> Vec<Payment> {
    vec![
        Payment {
            id: "pay-1".to_string(),
            property_id: "prop-1".to_string(),
            amount: 2500.0,
            payment_type: PaymentType::Rent,
            status: PaymentStatus::Paid,
            due_date: date(2023, 4, 1),
            paid_date: Some(date(2023, 4, 1)),
            mode: Some(PaymentMode::Bank),
            recurring: true,
            frequency: Some(PaymentFrequency::Monthly),
            notes: Some("April rent payment".to_string()),
            receipt_url: Some("/assets/receipts/april-rent.jpg".to_string()),
        },
        Payment {
            id: "pay-2".to_string(),
            property_id: "prop-1".to_string(),
            amount: 2500.0,
            payment_type: PaymentType::Rent,
            status: PaymentStatus::Upcoming,
            due_date: date(2023, 5, 1),
            paid_date: None,
            mode: None,
            recurring: true,
            frequency: Some(PaymentFrequency::Monthly),
            notes: Some("May rent payment".to_string()),
            receipt_url: None,
        },
        Payment {
            id: "pay-3".to_string(),
            property_id: "prop-2".to_string(),
            amount: 3200.0,
            payment_type: PaymentType::Emi,
            status: PaymentStatus::Paid,
            due_date: date(2023, 4, 10),
            paid_date: Some(date(2023, 4, 9)),
            mode: Some(PaymentMode::Bank),
            recurring: true,
            frequency: Some(PaymentFrequency::Monthly),
            notes: Some("April mortgage payment".to_string()),
            receipt_url: None,
        },
        Payment {
            id: "pay-4".to_string(),
            property_id: "prop-2".to_string(),
            amount: 3200.0,
            payment_type: PaymentType::Emi,
            status: PaymentStatus::Paid,
            due_date: date(2023, 5, 10),
            paid_date: Some(date(2023, 5, 9)),
            mode: Some(PaymentMode::Bank),
            recurring: true,
            frequency: Some(PaymentFrequency::Monthly),
            notes: Some("May mortgage payment".to_string()),
            receipt_url: None,
        },
        Payment {
            id: "pay-5".to_string(),
            property_id: "prop-2".to_string(),
            amount: 450.0,
            payment_type: PaymentType::Maintenance,
            status: PaymentStatus::Paid,
            due_date: date(2023, 4, 15),
            paid_date: Some(date(2023, 4, 15)),
            mode: Some(PaymentMode::Card),
            recurring: false,
            frequency: None,
            notes: Some("Emergency plumbing repair".to_string()),
            receipt_url: Some("/assets/receipts/plumbing-receipt.jpg".to_string()),
        },
        Payment {
            id: "pay-6".to_string(),
            property_id: "prop-3".to_string(),
            amount: 50_000.0,
            payment_type: PaymentType::Other,
            status: PaymentStatus::Upcoming,
            due_date: date(2023, 6, 30),
            paid_date: None,
            mode: None,
            recurring: false,
            frequency: None,
            notes: Some("Construction milestone payment".to_string()),
            receipt_url: None,
        },
        Payment {
            id: "pay-7".to_string(),
            property_id: "prop-2".to_string(),
            amount: 1200.0,
            payment_type: PaymentType::Tax,
            status: PaymentStatus::Overdue,
            due_date: date(2023, 3, 31),
            paid_date: None,
            mode: None,
            recurring: true,
            frequency: Some(PaymentFrequency::Yearly),
            notes: Some("Annual property tax".to_string()),
            receipt_url: None,
        },
    ]
}

pub fn seed_expense_breakdown() -> ExpenseBreakdown {
    ExpenseBreakdown {
        rent: 0.0,
        emi: 38_400.0,
        maintenance: 1800.0,
        tax: 1200.0,
        society: 900.0,
        utility: 650.0,
        other: 50_000.0,
    }
}

pub fn seed_settings() -> UserSettings {
    UserSettings {
        name: "John Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        currency: CurrencyCode::Usd,
        dark_mode: false,
        notifications_enabled: true,
        reminder_days: 3,
    }
}

/// Build the complete seed data set.
pub fn seed() -> FixtureData {
    FixtureData {
        properties: seed_properties(),
        payments: seed_payments(),
        monthly_expense_breakdown: seed_expense_breakdown(),
        settings: seed_settings(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let data = seed();
        assert_eq!(data.properties.len(), 3);
        assert_eq!(data.payments.len(), 7);
    }

    #[test]
    fn test_every_payment_references_a_seeded_property() {
        let data = seed();
        for payment in &data.payments {
            assert!(
                data.properties.iter().any(|p| p.id == payment.property_id),
                "payment {} references unknown property {}",
                payment.id,
                payment.property_id
            );
        }
    }

    #[test]
    fn test_only_pay_2_and_pay_6_are_upcoming() {
        let data = seed();
        let upcoming: Vec<&str> = data
            .payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Upcoming)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(upcoming, vec!["pay-2", "pay-6"]);
    }

    #[test]
    fn test_paid_payments_carry_a_paid_date() {
        let data = seed();
        for payment in &data.payments {
            if payment.status == PaymentStatus::Paid {
                assert!(
                    payment.paid_date.is_some(),
                    "paid payment {} has no paid date",
                    payment.id
                );
            }
        }
    }

    #[test]
    fn test_property_ids_are_unique() {
        let data = seed();
        for (i, a) in data.properties.iter().enumerate() {
            for b in data.properties.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
