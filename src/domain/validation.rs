//! Transaction validation
//!
//! Pure checks applied to a proposed transaction before anything is written.

use rust_decimal::Decimal;

use super::DomainError;

/// Outcome of validating a proposed transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(DomainError),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Convert into a `Result` so callers can use `?`
    pub fn into_result(self) -> Result<(), DomainError> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(reason) => Err(reason),
        }
    }
}

/// Validate the amount and description of a proposed transaction.
///
/// The amount is checked first, so a zero amount is reported even when the
/// description is also missing.
pub fn validate(amount: Decimal, description: Option<&str>) -> ValidationResult {
    if amount.is_zero() {
        return ValidationResult::Invalid(DomainError::ZeroAmount);
    }

    match description {
        Some(text) if !text.is_empty() => ValidationResult::Valid,
        _ => ValidationResult::Invalid(DomainError::MissingDescription),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_credit_and_debit() {
        assert!(validate(dec!(100), Some("Pagamento")).is_valid());
        assert!(validate(dec!(-50), Some("Saque")).is_valid());
        assert!(validate(dec!(0.01), Some("x")).is_valid());
    }

    #[test]
    fn test_zero_amount_rejected() {
        assert_eq!(
            validate(dec!(0), Some("x")),
            ValidationResult::Invalid(DomainError::ZeroAmount)
        );
        // 0.00 has a different scale but is still zero
        assert_eq!(
            validate(dec!(0.00), Some("x")),
            ValidationResult::Invalid(DomainError::ZeroAmount)
        );
    }

    #[test]
    fn test_missing_description_rejected() {
        assert_eq!(
            validate(dec!(5), Some("")),
            ValidationResult::Invalid(DomainError::MissingDescription)
        );
        assert_eq!(
            validate(dec!(5), None),
            ValidationResult::Invalid(DomainError::MissingDescription)
        );
    }

    #[test]
    fn test_amount_error_takes_precedence() {
        assert_eq!(
            validate(dec!(0), Some("")),
            ValidationResult::Invalid(DomainError::ZeroAmount)
        );
        assert_eq!(
            validate(dec!(0), None),
            ValidationResult::Invalid(DomainError::ZeroAmount)
        );
    }

    #[test]
    fn test_into_result() {
        assert!(validate(dec!(1), Some("ok")).into_result().is_ok());
        assert_eq!(
            validate(dec!(0), Some("ok")).into_result(),
            Err(DomainError::ZeroAmount)
        );
    }
}
