//! Seeding endpoint

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::seed;
use crate::state::AppState;

/// GET /seed - create tables and insert placeholder rows
async fn seed_database(State(state): State<Arc<AppState>>) -> Response {
    match seed::run(&state.pool).await {
        Ok(report) => {
            if report.total() > 0 {
                state.revalidate_invoices().await;
            }
            Json(json!({ "message": "Database seeded successfully" })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "seeding failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// Seed routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/seed", get(seed_database))
}
