//! Row identifier validation
//!
//! Invoice and customer keys are stored as CHAR(36). Seeded rows use UUID
//! text, but any short alphanumeric key is accepted.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

/// Maximum length of a stored key (CHAR(36))
const MAX_ID_LEN: usize = 36;

/// ASCII alphanumerics and hyphens only
static ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9-]+$").expect("invalid id regex"));

fn validate_id(s: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if trimmed.len() > MAX_ID_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_ID_LEN,
        });
    }

    if !ID_RE.is_match(trimmed) {
        return Err(ValidationError::InvalidFormat {
            field,
            reason: "must contain only letters, digits and hyphens",
        });
    }

    Ok(trimmed.to_owned())
}

/// Validated invoice key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InvoiceId(String);

impl InvoiceId {
    /// Create an invoice id, validating length and character set.
    ///
    /// # Example
    /// ```
    /// use invoicectl_server::models::InvoiceId;
    ///
    /// assert!(InvoiceId::new("cc27c14a-0acf-4f4a-a6c9-d45682c144b9").is_ok());
    /// assert!(InvoiceId::new("").is_err());
    /// assert!(InvoiceId::new("1; DROP TABLE invoices").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        validate_id(s, "invoice id").map(Self)
    }

    /// Fresh random key for a newly created invoice.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for InvoiceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated customer key (the invoice's foreign key)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        validate_id(s, "customer id").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CustomerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
