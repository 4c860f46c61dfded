//! In-memory payment repository.

use std::sync::{Arc, RwLock};

use anyhow::{anyhow, Result};
use shared::ExpenseBreakdown;

use crate::domain::models::payment::Payment;
use crate::storage::memory::fixtures::FixtureData;
use crate::storage::traits::PaymentStorage;

#[derive(Clone)]
pub struct MemoryPaymentRepository {
    data: Arc<RwLock<FixtureData>>,
}

impl MemoryPaymentRepository {
    pub fn new(data: Arc<RwLock<FixtureData>>) -> Self {
        Self { data }
    }
}

impl PaymentStorage for MemoryPaymentRepository {
    fn get_payment(&self, payment_id: &str) -> Result<Option<Payment>> {
        let data = self
            .data
            .read()
            .map_err(|_| anyhow!("payment store lock poisoned"))?;
        Ok(data.payments.iter().find(|p| p.id == payment_id).cloned())
    }

    fn list_payments(&self) -> Result<Vec<Payment>> {
        let data = self
            .data
            .read()
            .map_err(|_| anyhow!("payment store lock poisoned"))?;
        Ok(data.payments.clone())
    }

    fn list_payments_for_property(&self, property_id: &str) -> Result<Vec<Payment>> {
        let data = self
            .data
            .read()
            .map_err(|_| anyhow!("payment store lock poisoned"))?;
        Ok(data
            .payments
            .iter()
            .filter(|p| p.property_id == property_id)
            .cloned()
            .collect())
    }

    fn monthly_expense_breakdown(&self) -> Result<ExpenseBreakdown> {
        let data = self
            .data
            .read()
            .map_err(|_| anyhow!("payment store lock poisoned"))?;
        Ok(data.monthly_expense_breakdown.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::connection::MemoryConnection;
    use crate::storage::traits::Connection;

    #[test]
    fn test_every_payment_listed_under_its_property() {
        let connection = MemoryConnection::new();
        let repo = connection.create_payment_repository();
        for payment in repo.list_payments().unwrap() {
            let for_property = repo
                .list_payments_for_property(&payment.property_id)
                .unwrap();
            assert!(
                for_property.iter().any(|p| p.id == payment.id),
                "payment {} missing from its property listing",
                payment.id
            );
        }
    }

    #[test]
    fn test_payments_for_property_preserve_insertion_order() {
        let repo = MemoryConnection::new().create_payment_repository();
        let ids: Vec<String> = repo
            .list_payments_for_property("prop-2")
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["pay-3", "pay-4", "pay-5", "pay-7"]);
    }

    #[test]
    fn test_payments_for_unknown_property_is_empty() {
        let repo = MemoryConnection::new().create_payment_repository();
        assert!(repo
            .list_payments_for_property("prop-999")
            .unwrap()
            .is_empty());
    }
}
