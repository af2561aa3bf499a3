//! # Validation Module
//!
//! Checks applied to a configured menu price list.
//!
//! ## Where Validation Applies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Boundary                                │
//! │                                                                         │
//! │  MenuConfig::from_json ──► validate_price_list ──► init_dish_count_map  │
//! │        (checked)                                                        │
//! │                                                                         │
//! │  UI "add" button ────────────────────────────────► add_dish             │
//! │        (NOT checked: any number is tallied as given)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use dish_core::price::Price;
//! use dish_core::validation::validate_price_list;
//!
//! assert!(validate_price_list(&[Price::new(100.0), Price::new(200.0)]).is_ok());
//! assert!(validate_price_list(&[]).is_err());
//! ```

use crate::error::ValidationError;
use crate::price::Price;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const PRICES_FIELD: &str = "prices";

/// Validates a single menu price at position `index`.
///
/// ## Rules
/// - Must be finite (no NaN, no infinity)
/// - Must be zero or greater
pub fn validate_menu_price(index: usize, price: Price) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: PRICES_FIELD.to_string(),
            index,
            value: price.value(),
        });
    }

    if price.value() < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: PRICES_FIELD.to_string(),
            index,
            value: price.value(),
        });
    }

    Ok(())
}

/// Validates a menu price list.
///
/// ## Rules
/// - Must contain at least one price
/// - Every price must pass [`validate_menu_price`]
///
/// Duplicates are allowed; they collapse when the histogram is seeded.
pub fn validate_price_list(prices: &[Price]) -> ValidationResult<()> {
    if prices.is_empty() {
        return Err(ValidationError::Required {
            field: PRICES_FIELD.to_string(),
        });
    }

    prices
        .iter()
        .enumerate()
        .try_for_each(|(index, price)| validate_menu_price(index, *price))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_menu_price() {
        assert!(validate_menu_price(0, Price::new(0.0)).is_ok());
        assert!(validate_menu_price(0, Price::new(120.5)).is_ok());

        assert!(matches!(
            validate_menu_price(3, Price::new(-1.0)),
            Err(ValidationError::MustBeNonNegative { index: 3, .. })
        ));
        assert!(matches!(
            validate_menu_price(1, Price::new(f64::NAN)),
            Err(ValidationError::NotFinite { index: 1, .. })
        ));
        assert!(matches!(
            validate_menu_price(0, Price::new(f64::INFINITY)),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_validate_price_list() {
        let menu = [Price::new(100.0), Price::new(100.0), Price::new(300.0)];
        assert!(validate_price_list(&menu).is_ok());

        assert!(matches!(
            validate_price_list(&[]),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validate_price_list_reports_first_bad_index() {
        let menu = [Price::new(100.0), Price::new(-5.0), Price::new(f64::NAN)];
        match validate_price_list(&menu) {
            Err(ValidationError::MustBeNonNegative { index, value, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(value, -5.0);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
