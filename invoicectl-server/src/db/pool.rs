//! Database connection pool management
//!
//! The pool is created once at startup and handed to every repository.
//! A lazily built pool opens its first connection on the first query and
//! keeps reusing it; a broken connection is replaced on the next acquire.

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::MySqlPool;

use crate::config::DbConfig;

fn connect_options(config: &DbConfig) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.database)
}

/// Create a MySQL pool without connecting.
///
/// Bad credentials or an unreachable host surface on the first query.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DbConfig::from_env()?);
/// ```
pub fn create_pool(config: &DbConfig) -> MySqlPool {
    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy_with(connect_options(config))
}

/// Create a MySQL pool and open a connection immediately.
///
/// # Errors
///
/// Returns an error if the connection fails.
pub async fn connect_pool(config: &DbConfig) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(connect_options(config))
        .await
}
