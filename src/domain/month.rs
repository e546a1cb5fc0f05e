//! Month token
//!
//! A `YYYY-MM` token selecting the transactions of one month. Only the shape
//! is checked: `2025-13` is accepted as long as it matches the digit pattern.

use std::fmt;
use std::str::FromStr;

use super::DomainError;

/// Validated `YYYY-MM` month token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Month(String);

impl Month {
    /// Parse a month token.
    ///
    /// # Errors
    /// `DomainError::InvalidMonthFormat` unless the input is exactly four
    /// ASCII digits, a hyphen, and two ASCII digits.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let bytes = value.as_bytes();
        let well_formed = bytes.len() == 7
            && bytes[4] == b'-'
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[5..].iter().all(u8::is_ascii_digit);

        if !well_formed {
            return Err(DomainError::InvalidMonthFormat);
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Month {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Month::parse(s)
    }
}

/// Filter applied to the stored `createdAt` string to select a month.
///
/// This is a plain prefix match on the ISO-8601 text, not a date range.
pub fn created_at_prefix(month: &Month) -> String {
    month.0.clone()
}
