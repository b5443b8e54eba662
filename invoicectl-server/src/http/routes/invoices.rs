//! Invoice listing, edit data and form action endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::actions::{self, ActionOutcome};
use crate::db::repos::{CustomerField, CustomerRepo, InvoiceEditData, InvoiceListing, InvoiceRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ValidInvoiceId;
use crate::models::{InvoiceFields, ListingParams};
use crate::state::AppState;

impl IntoResponse for ActionOutcome {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(path) => Redirect::to(path).into_response(),
            Self::Invalid(form) => (StatusCode::UNPROCESSABLE_ENTITY, Json(form)).into_response(),
            Self::Failed(form) => (StatusCode::INTERNAL_SERVER_ERROR, Json(form)).into_response(),
        }
    }
}

/// Delete form body
#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    pub id: Option<String>,
}

/// Create form data
#[derive(Serialize)]
pub struct CreateFormData {
    pub customers: Vec<CustomerField>,
}

/// GET /dashboard/invoices?query=&page= - one listing page, cached until the next write or expiry
async fn list_invoices(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListingParams>,
) -> Result<Json<InvoiceListing>, ApiError> {
    let query = params.query();
    let page = params.pagination();

    if let Some(mut hit) = state.listings.get(query, page.page).await {
        tracing::debug!(query, page = page.page, "listing served from cache");
        hit.query = query.to_owned();
        return Ok(Json(hit));
    }

    let generation = state.listings.generation().await;
    let listing = InvoiceRepo::new(&state.pool).fetch_listing(query, page).await?;
    state
        .listings
        .insert(generation, query, page.page, listing.clone())
        .await;

    Ok(Json(listing))
}

/// POST /dashboard/invoices - create from form fields
async fn create_invoice(
    State(state): State<Arc<AppState>>,
    Form(fields): Form<InvoiceFields>,
) -> ActionOutcome {
    actions::create_invoice(&state, fields).await
}

/// GET /dashboard/invoices/create - customers for the create form
async fn create_form(State(state): State<Arc<AppState>>) -> Result<Json<CreateFormData>, ApiError> {
    let customers = CustomerRepo::new(&state.pool).fetch_customers().await?;
    Ok(Json(CreateFormData { customers }))
}

/// GET /dashboard/invoices/{id}/edit - invoice and customers for the edit form
async fn edit_form(
    State(state): State<Arc<AppState>>,
    ValidInvoiceId(id): ValidInvoiceId,
) -> Result<Json<InvoiceEditData>, ApiError> {
    let data = InvoiceRepo::new(&state.pool)
        .fetch_invoice_edit_data(&id)
        .await?;

    if data.invoice.is_none() {
        return Err(ApiError::NotFound {
            resource: "invoice",
            id: id.into_string(),
        });
    }
    Ok(Json(data))
}

/// POST /dashboard/invoices/{id}/edit - update from form fields
async fn update_invoice(
    State(state): State<Arc<AppState>>,
    ValidInvoiceId(id): ValidInvoiceId,
    Form(fields): Form<InvoiceFields>,
) -> ActionOutcome {
    actions::update_invoice(&state, &id, fields).await
}

/// POST /dashboard/invoices/delete - delete by submitted id
async fn delete_invoice(
    State(state): State<Arc<AppState>>,
    Form(form): Form<DeleteForm>,
) -> Response {
    let outcome = actions::delete_invoice(&state, form.id.as_deref()).await;
    let status = if outcome.success {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(outcome)).into_response()
}

/// Invoice routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard/invoices", get(list_invoices).post(create_invoice))
        .route("/dashboard/invoices/create", get(create_form))
        .route("/dashboard/invoices/delete", post(delete_invoice))
        .route(
            "/dashboard/invoices/{id}/edit",
            get(edit_form).post(update_invoice),
        )
}
