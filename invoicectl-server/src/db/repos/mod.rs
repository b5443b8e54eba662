//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - One fixed statement per operation, parameters bound through [`QueryExecutor`]
//! - Uses JOINs for list operations (no N+1)
//! - Read failures are logged and mapped to [`DbError::Fetch`] naming the operation
//!
//! [`QueryExecutor`]: crate::db::QueryExecutor

pub mod customers;
pub mod dashboard;
pub mod invoices;
pub mod revenue;

pub use customers::{CustomerField, CustomerRepo};
pub use dashboard::{CardData, DashboardRepo};
pub use invoices::{
    InvoiceEditData, InvoiceForm, InvoiceListing, InvoiceRepo, InvoicesTableRow, LatestInvoice,
};
pub use revenue::{Revenue, RevenueRepo};

use std::time::Duration;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// A read query failed; `what` is the operation-specific message.
    #[error("{what}")]
    Fetch {
        what: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl DbError {
    /// Log the underlying failure and wrap it for the named operation.
    pub(crate) fn fetch(what: &'static str) -> impl FnOnce(sqlx::Error) -> DbError {
        move |source| {
            tracing::error!("Database Error: {}", source);
            DbError::Fetch { what, source }
        }
    }
}

/// Sleep for a simulated latency, skipping the timer entirely when zero.
pub(crate) async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tracing::debug!(delay_ms = delay.as_millis() as u64, "simulating slow query");
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_shows_operation_message() {
        let err = DbError::fetch("Failed to fetch invoice.")(sqlx::Error::RowNotFound);
        assert_eq!(err.to_string(), "Failed to fetch invoice.");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_latency_waits_for_full_delay() {
        let start = tokio::time::Instant::now();
        simulate_latency(Duration::from_secs(3)).await;
        assert!(start.elapsed() >= Duration::from_secs(3));
    }
}
