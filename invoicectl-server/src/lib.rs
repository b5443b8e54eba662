//! invoicectl-server: invoice dashboard backend
//!
//! Lists, searches and paginates invoices, accepts create/update/delete
//! form submissions, and serves the dashboard's summary queries over a
//! MySQL database.

pub mod actions;
pub mod cache;
pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod seed;
pub mod state;

pub use config::{ConfigError, DbConfig, SimulatedLatency};
pub use state::AppState;
