//! Route handlers organized by resource

pub mod health;
pub mod dashboard;
pub mod invoices;
pub mod seed;
