//! Monthly revenue, read-only (populated by seeding)

use std::time::Duration;

use serde::Serialize;
use sqlx::{FromRow, MySqlPool};

use super::{simulate_latency, DbError};
use crate::db::QueryExecutor;

/// One month of revenue
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Revenue {
    pub month: String,
    pub revenue: i32,
}

/// Revenue repository
pub struct RevenueRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> RevenueRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// All revenue rows, unmodified, after the simulated delay.
    pub async fn fetch_revenue(&self, delay: Duration) -> Result<Vec<Revenue>, DbError> {
        simulate_latency(delay).await;

        QueryExecutor::new(self.pool)
            .fetch_all::<Revenue>("SELECT month, revenue FROM revenue", &[])
            .await
            .map_err(DbError::fetch("Failed to fetch revenue data."))
    }
}
