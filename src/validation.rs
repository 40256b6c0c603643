//! Input validators.
//!
//! Each validator checks a single constraint and returns the accepted value,
//! or an [`EngineError::Validation`] naming the offending field.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Returns `value` unchanged if it is zero or positive.
///
/// # Examples
///
/// ```
/// use payroll_engine::validation::validate_non_negative;
/// use rust_decimal::Decimal;
///
/// assert_eq!(validate_non_negative("base_pay", Decimal::ZERO).unwrap(), Decimal::ZERO);
/// assert!(validate_non_negative("base_pay", Decimal::new(-1, 2)).is_err());
/// ```
pub fn validate_non_negative(field: &str, value: Decimal) -> EngineResult<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(EngineError::validation(
            field,
            format!("must be non-negative, got {}", value),
        ));
    }
    Ok(value)
}

/// Parses `raw` as a number and then applies [`validate_non_negative`].
pub fn coerce_non_negative(field: &str, raw: &str) -> EngineResult<Decimal> {
    let trimmed = raw.trim();
    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| EngineError::validation(field, format!("'{}' is not a number", raw)))?;
    validate_non_negative(field, value)
}

/// Trims `value` and rejects it if nothing is left.
///
/// # Examples
///
/// ```
/// use payroll_engine::validation::validate_non_empty;
///
/// assert_eq!(validate_non_empty("name", "  Ada  ").unwrap(), "Ada");
/// assert!(validate_non_empty("name", "   ").is_err());
/// ```
pub fn validate_non_empty(field: &str, value: &str) -> EngineResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::validation(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}
