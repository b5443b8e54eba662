//! Database layer - connection pool, query executor and repositories
//!
//! # Design Principles
//!
//! - Injected connection pool, never a process-global connection
//! - All statements funnel through [`QueryExecutor`] with bound parameters
//! - All list operations use JOINs - no N+1 queries
//! - Rely on DB constraints (customer foreign key), no check-then-insert

pub mod executor;
pub mod pool;
pub mod repos;

pub use executor::{QueryExecutor, SqlParam};
pub use pool::{connect_pool, create_pool};
pub use repos::*;
