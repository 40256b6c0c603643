//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine and the temperature converter can report.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations in the crate return this error type, so callers
/// can surface a single user-facing message at the point of use.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::Validation {
///     field: "base_pay".to_string(),
///     message: "must be non-negative".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid value for 'base_pay': must be non-negative");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A value failed a validator.
    #[error("Invalid value for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the violated constraint.
        message: String,
    },

    /// No employee is stored under the given id.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: u32,
    },

    /// A sale was recorded against an employee who is not a salesperson.
    #[error("Employee {id} is not a salesperson")]
    NotASalesPerson {
        /// The id of the employee.
        id: u32,
    },

    /// Roster file was not found at the specified path.
    #[error("Roster file not found: {path}")]
    RosterNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Roster file could not be parsed.
    #[error("Failed to parse roster file '{path}': {message}")]
    RosterParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A temperature reading was not a number.
    #[error("Invalid temperature '{input}': expected a numeric value")]
    InvalidTemperature {
        /// The raw input.
        input: String,
    },

    /// A temperature unit token was not one of C, F or K.
    #[error("Unknown temperature unit '{unit}': only C, F and K are supported")]
    UnknownUnit {
        /// The raw unit token.
        unit: String,
    },

    /// Money arithmetic left the representable decimal range.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building a [`EngineError::Validation`].
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for building a [`EngineError::CalculationError`].
    pub fn calculation(message: impl Into<String>) -> Self {
        Self::CalculationError {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_displays_field_and_message() {
        let error = EngineError::validation("name", "must not be empty");
        assert_eq!(
            error.to_string(),
            "Invalid value for 'name': must not be empty"
        );
    }

    #[test]
    fn test_employee_not_found_displays_id() {
        let error = EngineError::EmployeeNotFound { id: 42 };
        assert_eq!(error.to_string(), "Employee not found: 42");
    }

    #[test]
    fn test_not_a_salesperson_displays_id() {
        let error = EngineError::NotASalesPerson { id: 3 };
        assert_eq!(error.to_string(), "Employee 3 is not a salesperson");
    }

    #[test]
    fn test_roster_parse_error_displays_path_and_message() {
        let error = EngineError::RosterParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse roster file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_unknown_unit_displays_token() {
        let error = EngineError::UnknownUnit {
            unit: "X".to_string(),
        };
        assert!(error.to_string().contains("'X'"));
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::calculation("developer_payroll overflowed");
        assert_eq!(
            error.to_string(),
            "Calculation error: developer_payroll overflowed"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::EmployeeNotFound { id: 7 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert_eq!(
            propagates_error(),
            Err(EngineError::EmployeeNotFound { id: 7 })
        );
    }
}
