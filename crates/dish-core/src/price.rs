//! # Price Module
//!
//! Provides the `Price` type used both as the running total and as the key
//! of the price histogram.
//!
//! ## Key Equality
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  WHY NOT A RAW f64 KEY?                                                 │
//! │                                                                         │
//! │  f64 is not Eq/Hash in Rust:                                            │
//! │    NaN != NaN,  0.0 == -0.0 but to_bits() differs                      │
//! │                                                                         │
//! │  The UI side keys its map with "same value zero" semantics:             │
//! │    NaN  == NaN   → one bucket                                           │
//! │    -0.0 == 0.0   → one bucket                                           │
//! │    otherwise     → bit-exact comparison                                 │
//! │                                                                         │
//! │  OUR SOLUTION: canonicalise, then compare bits                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use dish_core::price::Price;
//!
//! let plate = Price::new(500.0);
//! let total = plate + Price::new(700.0);
//! assert_eq!(total, Price::new(1200.0));
//!
//! // Same bucket in the histogram
//! assert_eq!(Price::new(0.0), Price::new(-0.0));
//! assert_eq!(Price::new(f64::NAN), Price::new(f64::NAN));
//! ```

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign};
use ts_rs::TS;

// =============================================================================
// Price Type
// =============================================================================

/// A dish price as a plain floating-point number.
///
/// ## Design Decisions
/// - **f64**: prices come from the UI as numbers and are summed with standard
///   floating-point addition, no rounding
/// - **No validation**: negative, fractional and non-finite values are legal
/// - **Eq/Hash/Ord**: defined on the canonical bit pattern so the type can key
///   a `HashMap` and sort deterministically
/// - **JSON**: a plain number when finite, otherwise one of the strings
///   `"NaN"`, `"Infinity"`, `"-Infinity"` (JSON has no non-finite numbers)
#[derive(Debug, Clone, Copy, TS)]
#[ts(export)]
pub struct Price(#[ts(type = "number | \"NaN\" | \"Infinity\" | \"-Infinity\"")] f64);

const NAN_TEXT: &str = "NaN";
const INFINITY_TEXT: &str = "Infinity";
const NEG_INFINITY_TEXT: &str = "-Infinity";

impl Price {
    /// Wraps a raw numeric price.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Price(value)
    }

    /// Returns the raw numeric value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Returns a zero price.
    ///
    /// ## Example
    /// ```rust
    /// use dish_core::price::Price;
    ///
    /// assert!(Price::zero().is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Price(0.0)
    }

    /// Checks if the value is zero (either sign).
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Checks if the value is neither infinite nor NaN.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Folds `-0.0` into `0.0` and every NaN payload into one NaN.
    fn canonical(&self) -> f64 {
        if self.0.is_nan() {
            f64::NAN
        } else if self.0 == 0.0 {
            0.0
        } else {
            self.0
        }
    }

    fn key_bits(&self) -> u64 {
        self.canonical().to_bits()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Price {
    fn default() -> Self {
        Price::zero()
    }
}

impl From<f64> for Price {
    #[inline]
    fn from(value: f64) -> Self {
        Price(value)
    }
}

impl From<Price> for f64 {
    #[inline]
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_nan() {
            serializer.serialize_str(NAN_TEXT)
        } else if self.0 == f64::INFINITY {
            serializer.serialize_str(INFINITY_TEXT)
        } else if self.0 == f64::NEG_INFINITY {
            serializer.serialize_str(NEG_INFINITY_TEXT)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

struct PriceVisitor;

impl<'de> Visitor<'de> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a number or one of \"{NAN_TEXT}\", \"{INFINITY_TEXT}\", \"{NEG_INFINITY_TEXT}\""
        )
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Price, E> {
        Ok(Price(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Price, E> {
        Ok(Price(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Price, E> {
        Ok(Price(value as f64))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Price, E> {
        match value {
            NAN_TEXT => Ok(Price(f64::NAN)),
            INFINITY_TEXT => Ok(Price(f64::INFINITY)),
            NEG_INFINITY_TEXT => Ok(Price(f64::NEG_INFINITY)),
            other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        self.key_bits() == other.key_bits()
    }
}

impl Eq for Price {}

impl Hash for Price {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key_bits().hash(state);
    }
}

/// Orders by `f64::total_cmp` on the canonical value.
/// NaN sorts after `+inf`.
impl Ord for Price {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().total_cmp(&other.canonical())
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Price {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Price(self.0 + other.0)
    }
}

impl AddAssign for Price {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_arithmetic() {
        let mut total = Price::zero();
        total += Price::new(500.0);
        total += Price::new(700.0);
        assert_eq!(total.value(), 1200.0);
        assert_eq!((Price::new(1.5) + Price::new(2.25)).value(), 3.75);
    }

    #[test]
    fn test_float_addition_is_not_rounded() {
        let total = Price::new(0.1) + Price::new(0.2);
        assert_eq!(total.value(), 0.1 + 0.2);
        assert_ne!(total, Price::new(0.3));
    }

    #[test]
    fn test_signed_zero_is_one_key() {
        let mut keys = HashSet::new();
        keys.insert(Price::new(0.0));
        keys.insert(Price::new(-0.0));
        assert_eq!(keys.len(), 1);
        assert!(Price::new(-0.0).is_zero());
    }

    #[test]
    fn test_nan_is_one_key() {
        let other_nan = f64::from_bits(f64::NAN.to_bits() | 1);
        assert!(other_nan.is_nan());

        let mut keys = HashSet::new();
        keys.insert(Price::new(f64::NAN));
        keys.insert(Price::new(other_nan));
        keys.insert(Price::new(-f64::NAN));
        assert_eq!(keys.len(), 1);
    }

    #[test]
    fn test_ordering() {
        let mut prices = vec![
            Price::new(f64::NAN),
            Price::new(700.0),
            Price::new(f64::INFINITY),
            Price::new(-100.0),
            Price::new(500.0),
        ];
        prices.sort();
        let values: Vec<f64> = prices.iter().map(|p| p.value()).collect();
        assert_eq!(values[..4], [-100.0, 500.0, 700.0, f64::INFINITY]);
        assert!(values[4].is_nan());
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::new(500.0).to_string(), "500");
        assert_eq!(Price::new(12.5).to_string(), "12.5");
        assert_eq!(Price::new(-3.0).to_string(), "-3");
    }

    #[test]
    fn test_serde_finite_is_plain_number() {
        let json = serde_json::to_string(&Price::new(500.0)).unwrap();
        assert_eq!(json, "500.0");
        let back: Price = serde_json::from_str("700").unwrap();
        assert_eq!(back, Price::new(700.0));
        let back: Price = serde_json::from_str("-12.5").unwrap();
        assert_eq!(back, Price::new(-12.5));
    }

    #[test]
    fn test_serde_non_finite_as_strings() {
        assert_eq!(
            serde_json::to_string(&Price::new(f64::NAN)).unwrap(),
            r#""NaN""#
        );
        assert_eq!(
            serde_json::to_string(&Price::new(f64::INFINITY)).unwrap(),
            r#""Infinity""#
        );
        assert_eq!(
            serde_json::to_string(&Price::new(f64::NEG_INFINITY)).unwrap(),
            r#""-Infinity""#
        );

        let back: Price = serde_json::from_str(r#""NaN""#).unwrap();
        assert!(back.value().is_nan());
        let back: Price = serde_json::from_str(r#""Infinity""#).unwrap();
        assert_eq!(back.value(), f64::INFINITY);
        let back: Price = serde_json::from_str(r#""-Infinity""#).unwrap();
        assert_eq!(back.value(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_serde_rejects_other_values() {
        assert!(serde_json::from_str::<Price>(r#""cheap""#).is_err());
        assert!(serde_json::from_str::<Price>("null").is_err());
    }

    #[test]
    fn test_ts_type_covers_non_finite() {
        let ts = Price::inline();
        assert!(ts.starts_with("number"));
        assert!(ts.contains("\"-Infinity\""));
    }
}
