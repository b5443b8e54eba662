//! Dashboard overview endpoints: cards, revenue chart, latest invoices, customers

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::{
    CardData, CustomerField, CustomerRepo, DashboardRepo, InvoiceRepo, LatestInvoice, Revenue,
    RevenueRepo,
};
use crate::http::error::ApiError;
use crate::state::AppState;

/// GET /dashboard - summary cards
async fn cards(State(state): State<Arc<AppState>>) -> Result<Json<CardData>, ApiError> {
    let cards = DashboardRepo::new(&state.pool).fetch_card_data().await?;
    Ok(Json(cards))
}

/// GET /dashboard/revenue
async fn revenue(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Revenue>>, ApiError> {
    let rows = RevenueRepo::new(&state.pool)
        .fetch_revenue(state.latency.revenue)
        .await?;
    Ok(Json(rows))
}

/// GET /dashboard/latest-invoices
async fn latest_invoices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LatestInvoice>>, ApiError> {
    let rows = InvoiceRepo::new(&state.pool)
        .fetch_latest_invoices(state.latency.latest_invoices)
        .await?;
    Ok(Json(rows))
}

/// GET /dashboard/customers
async fn customers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CustomerField>>, ApiError> {
    let customers = CustomerRepo::new(&state.pool).fetch_customers().await?;
    Ok(Json(customers))
}

/// Dashboard routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard", get(cards))
        .route("/dashboard/revenue", get(revenue))
        .route("/dashboard/latest-invoices", get(latest_invoices))
        .route("/dashboard/customers", get(customers))
}
