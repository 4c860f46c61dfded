//! Mapping between domain models and the shared DTO types handed to the UI.

use crate::domain::models::payment as domain_payment;
use crate::domain::models::property as domain_property;
use crate::domain::models::settings as domain_settings;

pub fn payment_to_dto(payment: domain_payment::Payment) -> shared::Payment {
    shared::Payment {
        id: payment.id,
        property_id: payment.property_id,
        amount: payment.amount,
        payment_type: payment_type_to_dto(payment.payment_type),
        status: payment_status_to_dto(payment.status),
        due_date: payment.due_date,
        paid_date: payment.paid_date,
        mode: payment.mode.map(payment_mode_to_dto),
        recurring: payment.recurring,
        frequency: payment.frequency.map(frequency_to_dto),
        notes: payment.notes,
        receipt_url: payment.receipt_url,
    }
}

pub fn payment_type_to_dto(t: domain_payment::PaymentType) -> shared::PaymentType {
    match t {
        domain_payment::PaymentType::Rent => shared::PaymentType::Rent,
        domain_payment::PaymentType::Emi => shared::PaymentType::Emi,
        domain_payment::PaymentType::Maintenance => shared::PaymentType::Maintenance,
        domain_payment::PaymentType::Tax => shared::PaymentType::Tax,
        domain_payment::PaymentType::Society => shared::PaymentType::Society,
        domain_payment::PaymentType::Utility => shared::PaymentType::Utility,
        domain_payment::PaymentType::Other => shared::PaymentType::Other,
    }
}

pub fn payment_status_to_dto(s: domain_payment::PaymentStatus) -> shared::PaymentStatus {
    match s {
        domain_payment::PaymentStatus::Paid => shared::PaymentStatus::Paid,
        domain_payment::PaymentStatus::Upcoming => shared::PaymentStatus::Upcoming,
        domain_payment::PaymentStatus::Overdue => shared::PaymentStatus::Overdue,
    }
}

pub fn payment_mode_to_dto(m: domain_payment::PaymentMode) -> shared::PaymentMode {
    match m {
        domain_payment::PaymentMode::Bank => shared::PaymentMode::Bank,
        domain_payment::PaymentMode::Card => shared::PaymentMode::Card,
        domain_payment::PaymentMode::Cash => shared::PaymentMode::Cash,
    }
}

pub fn frequency_to_dto(f: domain_payment::PaymentFrequency) -> shared::PaymentFrequency {
    match f {
        domain_payment::PaymentFrequency::Monthly => shared::PaymentFrequency::Monthly,
        domain_payment::PaymentFrequency::Quarterly => shared::PaymentFrequency::Quarterly,
        domain_payment::PaymentFrequency::Yearly => shared::PaymentFrequency::Yearly,
    }
}

pub fn property_to_dto(property: domain_property::Property) -> shared::Property {
    shared::Property {
        id: property.id,
        name: property.name,
        address: property.address,
        city: property.city,
        state: property.state,
        zip: property.zip,
        size: property.size,
        size_unit: match property.size_unit {
            domain_property::SizeUnit::SquareFeet => shared::SizeUnit::SquareFeet,
            domain_property::SizeUnit::SquareMeters => shared::SizeUnit::SquareMeters,
        },
        kind: match property.kind {
            domain_property::PropertyKind::Apartment => shared::PropertyKind::Apartment,
            domain_property::PropertyKind::Villa => shared::PropertyKind::Villa,
            domain_property::PropertyKind::House => shared::PropertyKind::House,
            domain_property::PropertyKind::Commercial => shared::PropertyKind::Commercial,
            domain_property::PropertyKind::Land => shared::PropertyKind::Land,
        },
        status: property_status_to_dto(property.status),
        current_value: property.current_value,
        tags: property.tags,
        primary_image: property.primary_image,
        images: property.images,
        documents: property.documents.into_iter().map(document_to_dto).collect(),
    }
}

pub fn property_status_to_dto(status: domain_property::PropertyStatus) -> shared::PropertyStatus {
    match status {
        domain_property::PropertyStatus::Rented {
            rented_since,
            lease_end,
            monthly_rent,
        } => shared::PropertyStatus::Rented {
            rented_since,
            lease_end,
            monthly_rent,
        },
        domain_property::PropertyStatus::Owned {
            purchase_date,
            down_payment,
            initial_value,
        } => shared::PropertyStatus::Owned {
            purchase_date,
            down_payment,
            initial_value,
        },
        domain_property::PropertyStatus::Construction { down_payment, notes } => {
            shared::PropertyStatus::Construction { down_payment, notes }
        }
    }
}

fn document_to_dto(doc: domain_property::PropertyDocument) -> shared::PropertyDocument {
    shared::PropertyDocument {
        id: doc.id,
        name: doc.name,
        kind: match doc.kind {
            domain_property::DocumentKind::Agreement => shared::DocumentKind::Agreement,
            domain_property::DocumentKind::Deed => shared::DocumentKind::Deed,
            domain_property::DocumentKind::Tax => shared::DocumentKind::Tax,
            domain_property::DocumentKind::Other => shared::DocumentKind::Other,
        },
        url: doc.url,
        upload_date: doc.upload_date,
    }
}

pub fn settings_to_dto(settings: domain_settings::UserSettings) -> shared::UserSettings {
    shared::UserSettings {
        name: settings.name,
        email: settings.email,
        currency: settings.currency,
        dark_mode: settings.dark_mode,
        notifications_enabled: settings.notifications_enabled,
        reminder_days: settings.reminder_days,
    }
}

pub fn settings_from_dto(settings: shared::UserSettings) -> domain_settings::UserSettings {
    domain_settings::UserSettings {
        name: settings.name,
        email: settings.email,
        currency: settings.currency,
        dark_mode: settings.dark_mode,
        notifications_enabled: settings.notifications_enabled,
        reminder_days: settings.reminder_days,
    }
}
