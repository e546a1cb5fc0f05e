//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use thiserror::Error;

/// Client-caused errors raised before any store access.
///
/// The `Display` output of each variant is the exact reason string
/// returned to callers in the `error` field of a 400 response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Zero-amount transactions are rejected
    #[error("Amount cannot be zero")]
    ZeroAmount,

    /// Request body carried no amount at all
    #[error("Amount is required")]
    MissingAmount,

    /// Description missing or empty
    #[error("Description is required")]
    MissingDescription,

    /// User ID missing or blank
    #[error("User ID is required")]
    MissingUserId,

    /// Month token does not match YYYY-MM
    #[error("Invalid month format (use YYYY-MM)")]
    InvalidMonthFormat,

    /// Pagination cursor could not be decoded
    #[error("Invalid cursor")]
    InvalidCursor,

    /// Page size is not a positive integer
    #[error("Invalid limit")]
    InvalidLimit,
}

impl DomainError {
    /// Machine-readable code used in error responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ZeroAmount => "zero_amount",
            Self::MissingAmount => "missing_amount",
            Self::MissingDescription => "missing_description",
            Self::MissingUserId => "missing_user_id",
            Self::InvalidMonthFormat => "invalid_month_format",
            Self::InvalidCursor => "invalid_cursor",
            Self::InvalidLimit => "invalid_limit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_strings() {
        assert_eq!(DomainError::ZeroAmount.to_string(), "Amount cannot be zero");
        assert_eq!(
            DomainError::MissingDescription.to_string(),
            "Description is required"
        );
        assert_eq!(
            DomainError::InvalidMonthFormat.to_string(),
            "Invalid month format (use YYYY-MM)"
        );
    }
}
