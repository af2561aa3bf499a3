//! # Error Types
//!
//! Error types for dish-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  TallyError          - Menu config could not be loaded                 │
//! │  ├── InvalidConfig   - JSON did not parse                              │
//! │  └── Validation      - JSON parsed, price list rejected                │
//! │                                                                         │
//! │  DishTally operations themselves have NO error type: every input is    │
//! │  accepted and applied arithmetically.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Tally Error
// =============================================================================

/// Errors raised while loading a menu configuration.
#[derive(Debug, Error)]
pub enum TallyError {
    /// The menu document is not valid JSON for `MenuConfig`.
    #[error("Invalid menu config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// The menu parsed but its price list is unusable.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Price list validation failures.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value is infinite or NaN.
    #[error("{field}[{index}] must be a finite number, got {value}")]
    NotFinite {
        field: String,
        index: usize,
        value: f64,
    },

    /// Value is below zero.
    #[error("{field}[{index}] must not be negative, got {value}")]
    MustBeNonNegative {
        field: String,
        index: usize,
        value: f64,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with TallyError.
pub type TallyResult<T> = Result<T, TallyError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "prices".to_string(),
        };
        assert_eq!(err.to_string(), "prices is required");

        let err = ValidationError::MustBeNonNegative {
            field: "prices".to_string(),
            index: 2,
            value: -100.0,
        };
        assert_eq!(err.to_string(), "prices[2] must not be negative, got -100");
    }

    #[test]
    fn test_validation_converts_to_tally_error() {
        let validation_err = ValidationError::Required {
            field: "prices".to_string(),
        };
        let err: TallyError = validation_err.into();
        assert!(matches!(err, TallyError::Validation(_)));
        assert_eq!(err.to_string(), "Validation error: prices is required");
    }

    #[test]
    fn test_json_error_converts_to_tally_error() {
        let json_err = serde_json::from_str::<Vec<f64>>("not json").unwrap_err();
        let err: TallyError = json_err.into();
        assert!(matches!(err, TallyError::InvalidConfig(_)));
    }
}
