//! Customer lookups for form selection inputs

use serde::Serialize;
use sqlx::{FromRow, MySqlPool};

use super::DbError;
use crate::db::QueryExecutor;

/// Customer as shown in a selection list
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct CustomerField {
    pub id: String,
    pub name: String,
}

/// Customer repository
pub struct CustomerRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> CustomerRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// All customers ordered by name.
    pub async fn fetch_customers(&self) -> Result<Vec<CustomerField>, DbError> {
        QueryExecutor::new(self.pool)
            .fetch_all::<CustomerField>(
                r#"
                SELECT id, name
                FROM customers
                ORDER BY name ASC
                "#,
                &[],
            )
            .await
            .map_err(DbError::fetch("Failed to fetch all customers."))
    }
}
