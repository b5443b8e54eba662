//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::{InvoiceId, ValidationError};

/// Extract and validate an invoice id from the path
pub struct ValidInvoiceId(pub InvoiceId);

impl<S> FromRequestParts<S> for ValidInvoiceId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "invoice id" }))?;

        let invoice_id = InvoiceId::new(&id)?;
        Ok(Self(invoice_id))
    }
}
