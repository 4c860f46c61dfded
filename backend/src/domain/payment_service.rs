//! Payment service.
//!
//! Handles the payment-side read operations: listing the payments attached
//! to a property and selecting the upcoming payments the dashboard shows.

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::domain::models::payment::Payment;
use crate::storage::{Connection, PaymentStorage};

#[derive(Clone)]
pub struct PaymentService<C: Connection> {
    payment_repository: C::PaymentRepository,
}

impl<C: Connection> PaymentService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        let payment_repository = connection.create_payment_repository();
        Self { payment_repository }
    }

    /// Look up a payment by ID
    pub fn get_payment(&self, payment_id: &str) -> Result<Option<Payment>> {
        self.payment_repository.get_payment(payment_id)
    }

    /// All payments, in insertion order
    pub fn list_payments(&self) -> Result<Vec<Payment>> {
        self.payment_repository.list_payments()
    }

    /// Payments referencing a property, in insertion order.
    ///
    /// A dangling property reference is not an error: the result is simply
    /// empty for IDs no payment mentions.
    pub fn payments_for_property(&self, property_id: &str) -> Result<Vec<Payment>> {
        self.payment_repository
            .list_payments_for_property(property_id)
    }

    /// Upcoming payments sorted ascending by due date, truncated to `limit`.
    ///
    /// The sort is stable, so payments sharing a due date keep their stored
    /// order.
    pub fn upcoming_payments(&self, limit: usize) -> Result<Vec<Payment>> {
        let mut upcoming: Vec<Payment> = self
            .payment_repository
            .list_payments()?
            .into_iter()
            .filter(|p| p.is_upcoming())
            .collect();

        upcoming.sort_by(|a, b| a.due_date.cmp(&b.due_date));
        upcoming.truncate(limit);

        info!("Selected {} upcoming payments (limit {})", upcoming.len(), limit);
        Ok(upcoming)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::payment::PaymentStatus;
    use crate::storage::memory::fixtures;
    use crate::storage::MemoryConnection;
    use chrono::NaiveDate;

    fn create_test_service() -> PaymentService<MemoryConnection> {
        PaymentService::new(Arc::new(MemoryConnection::new()))
    }

    #[test]
    fn test_every_payment_appears_under_its_property() {
        let service = create_test_service();
        for payment in service.list_payments().unwrap() {
            let listed = service.payments_for_property(&payment.property_id).unwrap();
            assert!(listed.iter().any(|p| p.id == payment.id));
        }
    }

    #[test]
    fn test_upcoming_payments_selection_and_order() {
        let service = create_test_service();
        let upcoming = service.upcoming_payments(3).unwrap();

        // Only pay-2 and pay-6 are upcoming in the fixture set, so the
        // truncation to 3 is a no-op here
        let ids: Vec<&str> = upcoming.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["pay-2", "pay-6"]);
        assert_eq!(
            upcoming[0].due_date,
            NaiveDate::from_ymd_opt(2023, 5, 1).unwrap()
        );
        assert_eq!(
            upcoming[1].due_date,
            NaiveDate::from_ymd_opt(2023, 6, 30).unwrap()
        );
    }

    #[test]
    fn test_upcoming_payments_truncates_to_limit() {
        let service = create_test_service();
        let upcoming = service.upcoming_payments(1).unwrap();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].id, "pay-2");
    }

    #[test]
    fn test_upcoming_payments_equal_due_dates_keep_stored_order() {
        // Seed two upcoming payments sharing a due date
        let mut data = fixtures::seed();
        let mut a = data.payments[1].clone();
        a.id = "pay-tie-1".to_string();
        let mut b = data.payments[1].clone();
        b.id = "pay-tie-2".to_string();
        data.payments = vec![a, b];
        assert!(data.payments.iter().all(|p| p.status == PaymentStatus::Upcoming));

        let connection = Arc::new(MemoryConnection::with_data(data));
        let service = PaymentService::new(connection);

        let ids: Vec<String> = service
            .upcoming_payments(3)
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["pay-tie-1", "pay-tie-2"]);
    }
}
