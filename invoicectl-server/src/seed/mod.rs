//! Database bootstrap: create tables and insert placeholder rows
//!
//! Safe to run repeatedly. Tables are created only if absent and every
//! insert is `INSERT IGNORE`, so a second run inserts nothing.

pub mod placeholder;

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::MySqlPool;

use crate::db::{QueryExecutor, SqlParam};
use placeholder::{CUSTOMERS, INVOICES, PLACEHOLDER_PASSWORD_HASH, REVENUE, USERS};

/// Seeding error
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("invalid placeholder date '{value}'")]
    InvalidDate {
        value: &'static str,
        #[source]
        source: chrono::ParseError,
    },
}

/// Rows inserted per table by one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub users: u64,
    pub customers: u64,
    pub revenue: u64,
    pub invoices: u64,
}

impl SeedReport {
    pub fn total(&self) -> u64 {
        self.users + self.customers + self.revenue + self.invoices
    }
}

/// Create all tables and insert placeholder data.
pub async fn run(pool: &MySqlPool) -> Result<SeedReport, SeedError> {
    tracing::info!("Seeding database...");
    let exec = QueryExecutor::new(pool);

    let report = SeedReport {
        users: seed_users(exec).await?,
        customers: seed_customers(exec).await?,
        revenue: seed_revenue(exec).await?,
        invoices: seed_invoices(exec).await?,
    };

    tracing::info!(
        users = report.users,
        customers = report.customers,
        revenue = report.revenue,
        invoices = report.invoices,
        "Seeding complete"
    );
    Ok(report)
}

async fn seed_users(exec: QueryExecutor<'_>) -> Result<u64, SeedError> {
    exec.execute(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id CHAR(36) PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL UNIQUE,
            password TEXT NOT NULL
        )
        "#,
        &[],
    )
    .await?;

    let mut inserted = 0;
    for user in USERS {
        inserted += exec
            .execute(
                "INSERT IGNORE INTO users (id, name, email, password) VALUES (?, ?, ?, ?)",
                &[
                    SqlParam::from(user.id),
                    SqlParam::from(user.name),
                    SqlParam::from(user.email),
                    SqlParam::from(PLACEHOLDER_PASSWORD_HASH),
                ],
            )
            .await?;
    }
    Ok(inserted)
}

async fn seed_customers(exec: QueryExecutor<'_>) -> Result<u64, SeedError> {
    exec.execute(
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            id CHAR(36) PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL,
            image_url VARCHAR(255) NOT NULL
        )
        "#,
        &[],
    )
    .await?;

    let mut inserted = 0;
    for customer in CUSTOMERS {
        inserted += exec
            .execute(
                "INSERT IGNORE INTO customers (id, name, email, image_url) VALUES (?, ?, ?, ?)",
                &[
                    SqlParam::from(customer.id),
                    SqlParam::from(customer.name),
                    SqlParam::from(customer.email),
                    SqlParam::from(customer.image_url),
                ],
            )
            .await?;
    }
    Ok(inserted)
}

async fn seed_revenue(exec: QueryExecutor<'_>) -> Result<u64, SeedError> {
    exec.execute(
        r#"
        CREATE TABLE IF NOT EXISTS revenue (
            month VARCHAR(4) NOT NULL UNIQUE,
            revenue INT NOT NULL
        )
        "#,
        &[],
    )
    .await?;

    let mut inserted = 0;
    for row in REVENUE {
        inserted += exec
            .execute(
                "INSERT IGNORE INTO revenue (month, revenue) VALUES (?, ?)",
                &[SqlParam::from(row.month), SqlParam::Int(row.revenue)],
            )
            .await?;
    }
    Ok(inserted)
}

async fn seed_invoices(exec: QueryExecutor<'_>) -> Result<u64, SeedError> {
    exec.execute(
        r#"
        CREATE TABLE IF NOT EXISTS invoices (
            id CHAR(36) PRIMARY KEY,
            customer_id CHAR(36) NOT NULL,
            amount INT NOT NULL,
            status VARCHAR(255) NOT NULL,
            date DATE NOT NULL,
            FOREIGN KEY (customer_id) REFERENCES customers(id)
        )
        "#,
        &[],
    )
    .await?;

    let mut inserted = 0;
    for (index, invoice) in INVOICES.iter().enumerate() {
        let date = NaiveDate::parse_from_str(invoice.date, "%Y-%m-%d").map_err(|source| {
            SeedError::InvalidDate {
                value: invoice.date,
                source,
            }
        })?;

        inserted += exec
            .execute(
                "INSERT IGNORE INTO invoices (id, customer_id, amount, status, date) VALUES (?, ?, ?, ?, ?)",
                &[
                    SqlParam::Text(placeholder::invoice_id(index)),
                    SqlParam::from(invoice.customer_id),
                    SqlParam::Int(invoice.amount),
                    SqlParam::from(invoice.status),
                    SqlParam::Date(date),
                ],
            )
            .await?;
    }
    Ok(inserted)
}
