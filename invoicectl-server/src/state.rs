//! Application state shared across handlers and actions

use sqlx::MySqlPool;

use crate::cache::PageCache;
use crate::config::SimulatedLatency;
use crate::db::InvoiceListing;

/// Shared application state
pub struct AppState {
    pub pool: MySqlPool,
    /// Computed invoice listing pages, cleared by every mutation
    pub listings: PageCache<InvoiceListing>,
    pub latency: SimulatedLatency,
}

impl AppState {
    pub fn new(pool: MySqlPool, latency: SimulatedLatency) -> Self {
        Self {
            pool,
            listings: PageCache::default(),
            latency,
        }
    }

    /// Mark every computed invoice listing as stale.
    pub async fn revalidate_invoices(&self) {
        self.listings.invalidate().await;
    }
}
