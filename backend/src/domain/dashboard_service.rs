//! Dashboard aggregation service.
//!
//! Computes the dashboard summary on demand from the property and payment
//! collections instead of keeping a stored copy, so the headline totals can
//! never drift from the records underneath them. The only seeded aggregate
//! is the monthly expense breakdown, whose society/utility categories have
//! no payment rows inside the fixture window.

use anyhow::Result;
use log::info;
use std::sync::Arc;

use shared::{CategoryTotal, DashboardSummary};

use crate::domain::mappers;
use crate::domain::payment_service::PaymentService;
use crate::storage::{Connection, PaymentStorage, PropertyStorage};

/// How many upcoming payments the dashboard shows
const UPCOMING_PAYMENTS_LIMIT: usize = 3;

#[derive(Clone)]
pub struct DashboardService<C: Connection> {
    property_repository: C::PropertyRepository,
    payment_repository: C::PaymentRepository,
    payment_service: PaymentService<C>,
}

impl<C: Connection> DashboardService<C> {
    pub fn new(connection: Arc<C>, payment_service: PaymentService<C>) -> Self {
        let property_repository = connection.create_property_repository();
        let payment_repository = connection.create_payment_repository();
        Self {
            property_repository,
            payment_repository,
            payment_service,
        }
    }

    /// Compute the dashboard summary from the source collections.
    ///
    /// Total expenses is defined as the sum of the expense breakdown, so the
    /// stat card and the chart next to it always agree. Rent income is the
    /// annualized monthly rent over rented properties.
    pub fn summary(&self) -> Result<DashboardSummary> {
        let properties = self.property_repository.list_properties()?;
        let breakdown = self.payment_repository.monthly_expense_breakdown()?;

        let rented = properties.iter().filter(|p| p.is_rented()).count();
        let owned = properties.iter().filter(|p| p.is_owned()).count();
        let construction = properties
            .iter()
            .filter(|p| p.is_under_construction())
            .count();

        let total_rent_income: f64 = properties.iter().map(|p| p.monthly_rent()).sum::<f64>() * 12.0;
        let total_expenses = breakdown.total();

        let upcoming_payments = self
            .payment_service
            .upcoming_payments(UPCOMING_PAYMENTS_LIMIT)?
            .into_iter()
            .map(mappers::payment_to_dto)
            .collect();

        info!(
            "Computed dashboard summary over {} properties ({} rented / {} owned / {} construction)",
            properties.len(),
            rented,
            owned,
            construction
        );

        Ok(DashboardSummary {
            total_properties: properties.len(),
            rented_properties: rented,
            owned_properties: owned,
            construction_properties: construction,
            total_expenses,
            total_rent_income,
            upcoming_payments,
            monthly_expense_breakdown: breakdown,
        })
    }

    /// Project the expense breakdown into a chart-ready series: one entry
    /// per category in fixed order, label capitalized, value unchanged.
    pub fn expense_chart_series(&self) -> Result<Vec<CategoryTotal>> {
        let breakdown = self.payment_repository.monthly_expense_breakdown()?;
        Ok(breakdown
            .entries()
            .into_iter()
            .map(|(category, value)| CategoryTotal {
                label: capitalize_first(category.key()),
                value,
            })
            .collect())
    }

    /// Property counts by status, in chart order (rented, owned, construction)
    pub fn portfolio_chart_series(&self) -> Result<Vec<CategoryTotal>> {
        let summary = self.summary()?;
        Ok(vec![
            CategoryTotal {
                label: "Rented".to_string(),
                value: summary.rented_properties as f64,
            },
            CategoryTotal {
                label: "Owned".to_string(),
                value: summary.owned_properties as f64,
            },
            CategoryTotal {
                label: "Construction".to_string(),
                value: summary.construction_properties as f64,
            },
        ])
    }
}

fn capitalize_first(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryConnection;

    fn create_test_service() -> DashboardService<MemoryConnection> {
        let connection = Arc::new(MemoryConnection::new());
        let payment_service = PaymentService::new(connection.clone());
        DashboardService::new(connection, payment_service)
    }

    #[test]
    fn test_summary_counts_match_collections() {
        let service = create_test_service();
        let summary = service.summary().unwrap();

        assert_eq!(summary.total_properties, 3);
        assert_eq!(summary.rented_properties, 1);
        assert_eq!(summary.owned_properties, 1);
        assert_eq!(summary.construction_properties, 1);
    }

    #[test]
    fn test_summary_rent_income_is_annualized() {
        let service = create_test_service();
        let summary = service.summary().unwrap();
        // One rented property at 2500/month
        assert_eq!(summary.total_rent_income, 30_000.0);
    }

    #[test]
    fn test_summary_total_expenses_equals_breakdown_sum() {
        let service = create_test_service();
        let summary = service.summary().unwrap();
        assert_eq!(
            summary.total_expenses,
            summary.monthly_expense_breakdown.total()
        );
    }

    #[test]
    fn test_summary_upcoming_payments() {
        let service = create_test_service();
        let summary = service.summary().unwrap();
        let ids: Vec<&str> = summary
            .upcoming_payments
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["pay-2", "pay-6"]);
    }

    #[test]
    fn test_expense_chart_series_labels_and_values() {
        let service = create_test_service();
        let series = service.expense_chart_series().unwrap();

        assert_eq!(series.len(), 7);
        let labels: Vec<&str> = series.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Rent", "Emi", "Maintenance", "Tax", "Society", "Utility", "Other"]
        );
        let values: Vec<f64> = series.iter().map(|c| c.value).collect();
        assert_eq!(
            values,
            vec![0.0, 38_400.0, 1800.0, 1200.0, 900.0, 650.0, 50_000.0]
        );
    }

    #[test]
    fn test_portfolio_chart_series() {
        let service = create_test_service();
        let series = service.portfolio_chart_series().unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].label, "Rented");
        assert_eq!(series[0].value, 1.0);
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("rent"), "Rent");
        assert_eq!(capitalize_first("emi"), "Emi");
        assert_eq!(capitalize_first(""), "");
    }
}
