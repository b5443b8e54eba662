//! Dashboard summary cards

use serde::Serialize;
use sqlx::{FromRow, MySqlPool};

use super::DbError;
use crate::db::QueryExecutor;
use crate::models::Cents;

/// Summary numbers for the dashboard cards
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    pub number_of_customers: i64,
    pub number_of_invoices: i64,
    pub total_paid_invoices: String,
    pub total_pending_invoices: String,
}

#[derive(Debug, FromRow)]
struct Count {
    count: i64,
}

#[derive(Debug, FromRow)]
struct StatusTotals {
    paid: i64,
    pending: i64,
}

impl CardData {
    /// Combine the three aggregate results; missing rows count as zero.
    fn combine(
        invoices: Option<Count>,
        customers: Option<Count>,
        totals: Option<StatusTotals>,
    ) -> Self {
        let (paid, pending) = totals.map(|t| (t.paid, t.pending)).unwrap_or((0, 0));
        Self {
            number_of_customers: customers.map(|c| c.count).unwrap_or(0),
            number_of_invoices: invoices.map(|c| c.count).unwrap_or(0),
            total_paid_invoices: Cents::new(paid).format_usd(),
            total_pending_invoices: Cents::new(pending).format_usd(),
        }
    }
}

/// Dashboard repository
pub struct DashboardRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> DashboardRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Invoice count, customer count and paid/pending totals.
    ///
    /// The three aggregates run concurrently and are joined before combining.
    pub async fn fetch_card_data(&self) -> Result<CardData, DbError> {
        let exec = QueryExecutor::new(self.pool);

        let invoice_count =
            exec.fetch_optional::<Count>("SELECT COUNT(*) AS count FROM invoices", &[]);
        let customer_count =
            exec.fetch_optional::<Count>("SELECT COUNT(*) AS count FROM customers", &[]);
        let invoice_status = exec.fetch_optional::<StatusTotals>(
            r#"
            SELECT
                CAST(COALESCE(SUM(CASE WHEN status = 'paid' THEN amount ELSE 0 END), 0) AS SIGNED) AS paid,
                CAST(COALESCE(SUM(CASE WHEN status = 'pending' THEN amount ELSE 0 END), 0) AS SIGNED) AS pending
            FROM invoices
            "#,
            &[],
        );

        let (invoices, customers, totals) =
            tokio::try_join!(invoice_count, customer_count, invoice_status)
                .map_err(DbError::fetch("Failed to fetch card data."))?;

        Ok(CardData::combine(invoices, customers, totals))
    }
}
