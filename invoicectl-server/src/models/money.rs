//! Currency amounts
//!
//! Amounts are stored as integer minor units (cents). Forms and the edit view
//! work in major units (dollars). [`Cents::from_major`] and
//! [`Cents::to_major`] are the only crossings between the two.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Largest value the `invoices.amount` INT column can hold
const MAX_STORED_CENTS: i64 = i32::MAX as i64;

/// Integer amount in minor currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cents(i64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    pub fn new(minor_units: i64) -> Self {
        Self(minor_units)
    }

    /// Convert a submitted major-unit amount into a storable amount.
    ///
    /// Rounds to the nearest cent. The result must be at least one cent and
    /// fit the INT column.
    pub fn from_major(major: f64) -> Result<Self, ValidationError> {
        if !major.is_finite() {
            return Err(ValidationError::OutOfRange { field: "amount" });
        }
        if major <= 0.0 {
            return Err(ValidationError::NotPositive { field: "amount" });
        }

        let minor = (major * 100.0).round();
        if minor < 1.0 {
            return Err(ValidationError::NotPositive { field: "amount" });
        }
        if minor > MAX_STORED_CENTS as f64 {
            return Err(ValidationError::OutOfRange { field: "amount" });
        }

        Ok(Self(minor as i64))
    }

    /// Major-unit value for pre-filling the edit form.
    pub fn to_major(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Raw minor units, as bound into SQL.
    pub fn get(self) -> i64 {
        self.0
    }

    /// Display string in US dollars, e.g. `$1,234.56`.
    pub fn format_usd(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let dollars = (abs / 100).to_string();
        let cents = abs % 100;

        let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
        for (i, ch) in dollars.chars().enumerate() {
            if i > 0 && (dollars.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        format!("{sign}${grouped}.{cents:02}")
    }
}

impl From<i32> for Cents {
    fn from(value: i32) -> Self {
        Self(i64::from(value))
    }
}

impl From<i64> for Cents {
    fn from(value: i64) -> Self {
        Self(value)
    }
}
