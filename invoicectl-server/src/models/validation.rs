//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Field is missing or blank
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// String doesn't match required format
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Text could not be read as a number
    NotANumber { field: &'static str, value: String },

    /// Number must be strictly greater than zero
    NotPositive { field: &'static str },

    /// Number does not fit the storage column
    OutOfRange { field: &'static str },

    /// Invalid enum variant
    InvalidVariant { field: &'static str, value: String },
}

impl ValidationError {
    /// Name of the field that failed.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field }
            | Self::TooLong { field, .. }
            | Self::InvalidFormat { field, .. }
            | Self::NotANumber { field, .. }
            | Self::NotPositive { field }
            | Self::OutOfRange { field }
            | Self::InvalidVariant { field, .. } => field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::NotANumber { field, value } => {
                write!(f, "{} is not a number: '{}'", field, value)
            }
            Self::NotPositive { field } => write!(f, "{} must be greater than zero", field),
            Self::OutOfRange { field } => write!(f, "{} is out of range", field),
            Self::InvalidVariant { field, value } => {
                write!(f, "invalid {} value: '{}'", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
