//! Form actions: create, update and delete invoices
//!
//! A create/update submission moves through
//! `Validating -> Invalid | Persisting -> Failed | Invalidate & Redirect`.
//! Validation and persistence failures are returned as a [`FormState`] for the
//! form to re-render; they are never raised as errors.

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::db::InvoiceRepo;
use crate::models::{FormState, InvoiceFields, InvoiceId};
use crate::state::AppState;

/// Where a successful create/update sends the browser
pub const INVOICES_PATH: &str = "/dashboard/invoices";

const CREATE_INVALID: &str = "Missing Fields. Failed to Create Invoice.";
const CREATE_FAILED: &str = "Database Error: Failed to Create Invoice.";
const UPDATE_INVALID: &str = "Missing Fields. Failed to Update Invoice.";
const UPDATE_FAILED: &str = "Database Error: Failed to Update Invoice.";
const DELETE_FAILED: &str = "Database Error: Failed to Delete Invoice.";

/// Terminal state of a create/update submission
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// Validation failed; nothing was written
    Invalid(FormState),
    /// Validation passed but the write failed
    Failed(FormState),
    /// Written and cache invalidated; continue at this path
    Redirect(&'static str),
}

/// Result of a delete submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Current calendar date in UTC.
fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Validate and insert a new invoice dated today.
pub async fn create_invoice(state: &AppState, fields: InvoiceFields) -> ActionOutcome {
    let invoice = match fields.validate() {
        Ok(invoice) => invoice,
        Err(errors) => {
            tracing::info!(?errors, "create invoice rejected");
            return ActionOutcome::Invalid(FormState::invalid(fields, errors, CREATE_INVALID));
        }
    };

    let id = InvoiceId::generate();
    let date = today();
    if let Err(e) = InvoiceRepo::new(&state.pool).insert(&id, &invoice, date).await {
        tracing::error!(error = %e, "failed to create invoice");
        return ActionOutcome::Failed(FormState::failed(fields, CREATE_FAILED));
    }

    tracing::info!(
        invoice_id = %id.as_str(),
        customer_id = %invoice.customer_id.as_str(),
        amount = invoice.amount.get(),
        %date,
        "invoice created"
    );
    state.revalidate_invoices().await;
    ActionOutcome::Redirect(INVOICES_PATH)
}

/// Validate and overwrite an existing invoice.
///
/// An id with no matching row is a no-op that still redirects.
pub async fn update_invoice(state: &AppState, id: &InvoiceId, fields: InvoiceFields) -> ActionOutcome {
    let invoice = match fields.validate() {
        Ok(invoice) => invoice,
        Err(errors) => {
            tracing::info!(invoice_id = %id.as_str(), ?errors, "update invoice rejected");
            return ActionOutcome::Invalid(FormState::invalid(fields, errors, UPDATE_INVALID));
        }
    };

    match InvoiceRepo::new(&state.pool).update(id, &invoice).await {
        Ok(0) => tracing::warn!(invoice_id = %id.as_str(), "update matched no invoice"),
        Ok(_) => tracing::info!(invoice_id = %id.as_str(), "invoice updated"),
        Err(e) => {
            tracing::error!(invoice_id = %id.as_str(), error = %e, "failed to update invoice");
            return ActionOutcome::Failed(FormState::failed(fields, UPDATE_FAILED));
        }
    }

    state.revalidate_invoices().await;
    ActionOutcome::Redirect(INVOICES_PATH)
}

/// Delete the invoice with the submitted id.
///
/// Ids that match nothing (including malformed ones) are a successful no-op.
pub async fn delete_invoice(state: &AppState, raw_id: Option<&str>) -> DeleteOutcome {
    let id = match raw_id.map(InvoiceId::new) {
        Some(Ok(id)) => id,
        Some(Err(e)) => {
            tracing::warn!(error = %e, "delete requested for malformed id");
            return DeleteOutcome {
                success: true,
                message: None,
            };
        }
        None => {
            tracing::warn!("delete requested without an id");
            return DeleteOutcome {
                success: true,
                message: None,
            };
        }
    };

    match InvoiceRepo::new(&state.pool).delete(&id).await {
        Ok(affected) => {
            tracing::info!(invoice_id = %id.as_str(), affected, "invoice deleted");
            state.revalidate_invoices().await;
            DeleteOutcome {
                success: true,
                message: None,
            }
        }
        Err(e) => {
            tracing::error!(invoice_id = %id.as_str(), error = %e, "failed to delete invoice");
            DeleteOutcome {
                success: false,
                message: Some(DELETE_FAILED.to_owned()),
            }
        }
    }
}
