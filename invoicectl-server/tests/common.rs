//! Shared helpers for database-backed tests
//!
//! These tests need a MySQL database reachable through the usual MYSQL_*
//! variables. Run with: cargo test -p invoicectl-server -- --ignored

#![allow(dead_code)]

use invoicectl_server::{seed, AppState, DbConfig, SimulatedLatency};
use sqlx::MySqlPool;

/// Connect, make sure the schema and placeholder rows exist.
pub async fn seeded_state() -> AppState {
    let config = DbConfig::from_env().expect("MYSQL_* variables required");
    let pool = invoicectl_server::db::connect_pool(&config)
        .await
        .expect("database connection failed");
    seed::run(&pool).await.expect("seeding failed");
    AppState::new(pool, SimulatedLatency::none())
}

/// Insert a customer owned by one test, removing any invoices a previous run left behind.
pub async fn fresh_customer(pool: &MySqlPool, id: &str, name: &str, email: &str) {
    sqlx::query("INSERT IGNORE INTO customers (id, name, email, image_url) VALUES (?, ?, ?, ?)")
        .bind(id)
        .bind(name)
        .bind(email)
        .bind("/customers/placeholder.png")
        .execute(pool)
        .await
        .expect("insert customer");

    sqlx::query("DELETE FROM invoices WHERE customer_id = ?")
        .bind(id)
        .execute(pool)
        .await
        .expect("clear invoices");
}

pub async fn invoice_count_for(pool: &MySqlPool, customer_id: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM invoices WHERE customer_id = ?")
        .bind(customer_id)
        .fetch_one(pool)
        .await
        .expect("count invoices");
    count
}

pub async fn table_count(pool: &MySqlPool, table: &str) -> i64 {
    // table names come from the test code, never from input
    let sql = format!("SELECT COUNT(*) FROM {table}");
    let (count,): (i64,) = sqlx::query_as(&sql)
        .fetch_one(pool)
        .await
        .expect("count rows");
    count
}
