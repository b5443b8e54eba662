//! Invoice form schema and the state returned to a form after a failed submission

use serde::{Deserialize, Serialize};

use super::{Cents, CustomerId, InvoiceStatus, ValidationError};

pub const CUSTOMER_MESSAGE: &str = "Please select a customer.";
pub const AMOUNT_MESSAGE: &str = "Please enter an amount greater than $0.";
pub const STATUS_MESSAGE: &str = "Please select an invoice status.";

/// Untrusted fields as submitted by the create/edit form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceFields {
    pub customer_id: Option<String>,
    pub amount: Option<String>,
    pub status: Option<String>,
}

/// Fields that passed validation, amount already in minor units.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidInvoice {
    pub customer_id: CustomerId,
    pub amount: Cents,
    pub status: InvoiceStatus,
}

/// Per-field error messages. Empty lists are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub customer_id: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amount: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.customer_id.is_empty() && self.amount.is_empty() && self.status.is_empty()
    }
}

impl InvoiceFields {
    /// Check every field, collecting one message per failing field.
    pub fn validate(&self) -> Result<ValidInvoice, FieldErrors> {
        let mut errors = FieldErrors::default();

        let customer_id = require(&self.customer_id, "customerId")
            .and_then(CustomerId::new)
            .map_err(|e| {
                tracing::debug!(error = %e, "customerId rejected");
                errors.customer_id.push(CUSTOMER_MESSAGE.to_owned());
            })
            .ok();

        let amount = coerce_amount(self.amount.as_deref())
            .and_then(Cents::from_major)
            .map_err(|e| {
                tracing::debug!(error = %e, "amount rejected");
                errors.amount.push(AMOUNT_MESSAGE.to_owned());
            })
            .ok();

        let status = require(&self.status, "status")
            .and_then(str::parse::<InvoiceStatus>)
            .map_err(|e| {
                tracing::debug!(error = %e, "status rejected");
                errors.status.push(STATUS_MESSAGE.to_owned());
            })
            .ok();

        match (customer_id, amount, status) {
            (Some(customer_id), Some(amount), Some(status)) => Ok(ValidInvoice {
                customer_id,
                amount,
                status,
            }),
            _ => Err(errors),
        }
    }
}

fn require<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, ValidationError> {
    value.as_deref().ok_or(ValidationError::Empty { field })
}

/// Read form text as a number. Absent or blank input counts as zero.
fn coerce_amount(raw: Option<&str>) -> Result<f64, ValidationError> {
    let trimmed = raw.unwrap_or("").trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| ValidationError::NotANumber {
            field: "amount",
            value: trimmed.to_owned(),
        })
}

/// Result of a create/update attempt that did not redirect.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormState {
    pub errors: FieldErrors,
    pub message: Option<String>,
    pub fields: InvoiceFields,
}

impl FormState {
    /// Validation failed: field errors plus a summary message.
    pub fn invalid(fields: InvoiceFields, errors: FieldErrors, message: impl Into<String>) -> Self {
        Self {
            errors,
            message: Some(message.into()),
            fields,
        }
    }

    /// Persistence failed after validation passed.
    pub fn failed(fields: InvoiceFields, message: impl Into<String>) -> Self {
        Self {
            errors: FieldErrors::default(),
            message: Some(message.into()),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(customer: Option<&str>, amount: Option<&str>, status: Option<&str>) -> InvoiceFields {
        InvoiceFields {
            customer_id: customer.map(str::to_owned),
            amount: amount.map(str::to_owned),
            status: status.map(str::to_owned),
        }
    }

    #[test]
    fn accepts_valid_submission() {
        let valid = fields(Some("3958dc9e-712f-4377-85e9-fec4b6a6442a"), Some("157.95"), Some("pending"))
            .validate()
            .unwrap();
        assert_eq!(valid.customer_id.as_str(), "3958dc9e-712f-4377-85e9-fec4b6a6442a");
        assert_eq!(valid.amount, Cents::new(15795));
        assert_eq!(valid.status, InvoiceStatus::Pending);
    }

    #[test]
    fn amount_is_trimmed_and_coerced() {
        let valid = fields(Some("c1"), Some(" 12 "), Some("paid")).validate().unwrap();
        assert_eq!(valid.amount, Cents::new(1200));
    }

    #[test]
    fn empty_submission_reports_every_field() {
        let errors = InvoiceFields::default().validate().unwrap_err();
        assert_eq!(errors.customer_id, vec![CUSTOMER_MESSAGE]);
        assert_eq!(errors.amount, vec![AMOUNT_MESSAGE]);
        assert_eq!(errors.status, vec![STATUS_MESSAGE]);
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        for amount in ["0", "-1", "-0.01", "0.001", "", "abc", "NaN", "inf"] {
            let errors = fields(Some("c1"), Some(amount), Some("paid")).validate().unwrap_err();
            assert_eq!(errors.amount, vec![AMOUNT_MESSAGE], "amount {amount:?}");
            assert!(errors.customer_id.is_empty());
            assert!(errors.status.is_empty());
        }
    }

    #[test]
    fn status_must_match_exactly() {
        let errors = fields(Some("c1"), Some("10"), Some("PAID")).validate().unwrap_err();
        assert_eq!(errors.status, vec![STATUS_MESSAGE]);
    }

    #[test]
    fn blank_customer_is_rejected() {
        let errors = fields(Some(""), Some("10"), Some("paid")).validate().unwrap_err();
        assert_eq!(errors.customer_id, vec![CUSTOMER_MESSAGE]);
    }

    #[test]
    fn form_state_json_shape() {
        let submitted = fields(None, Some("0"), Some("paid"));
        let errors = submitted.validate().unwrap_err();
        let state = FormState::invalid(submitted, errors, "Missing Fields. Failed to Create Invoice.");

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["errors"]["customerId"][0], CUSTOMER_MESSAGE);
        assert_eq!(json["errors"]["amount"][0], AMOUNT_MESSAGE);
        assert!(json["errors"].get("status").is_none());
        assert_eq!(json["message"], "Missing Fields. Failed to Create Invoice.");
        assert_eq!(json["fields"]["amount"], "0");
        assert!(json["fields"]["customerId"].is_null());
    }

    #[test]
    fn deserializes_camel_case_form_keys() {
        let parsed: InvoiceFields =
            serde_json::from_str(r#"{"customerId":"c1","amount":"5","status":"paid"}"#).unwrap();
        assert_eq!(parsed, fields(Some("c1"), Some("5"), Some("paid")));
    }
}
