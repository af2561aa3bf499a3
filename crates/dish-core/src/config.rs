//! # Menu Configuration
//!
//! The list of known plate prices the UI seeds the histogram with.
//!
//! ## Document Format
//! ```json
//! { "prices": [100, 150, 200, 300, 400, 500] }
//! ```
//!
//! Prices are validated on load (finite, non-negative, at least one).
//! Duplicates are kept here and collapse when the histogram is seeded.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::error::TallyResult;
use crate::price::Price;
use crate::validation::validate_price_list;

/// Placeholder plate prices used when no menu is configured.
///
/// These are not a real menu. Deployments pass their own price list through
/// [`MenuConfig::from_json`] or [`MenuConfig::new`].
pub const DEFAULT_MENU_PRICES: [f64; 6] = [100.0, 150.0, 200.0, 300.0, 400.0, 500.0];

/// Menu configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuConfig {
    /// Known price points, in display order.
    pub prices: Vec<Price>,
}

impl MenuConfig {
    /// Builds a validated menu from raw prices.
    ///
    /// ## Example
    /// ```rust
    /// use dish_core::MenuConfig;
    ///
    /// assert!(MenuConfig::new([100.0, 200.0]).is_ok());
    /// assert!(MenuConfig::new([100.0, -1.0]).is_err());
    /// ```
    pub fn new<I>(prices: I) -> TallyResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Price>,
    {
        let menu = MenuConfig {
            prices: prices.into_iter().map(Into::into).collect(),
        };
        menu.validate()?;
        Ok(menu)
    }

    /// Parses and validates a JSON menu document.
    pub fn from_json(json: &str) -> TallyResult<Self> {
        let menu: MenuConfig = serde_json::from_str(json).map_err(|err| {
            warn!(error = %err, "menu config is not valid JSON");
            err
        })?;
        menu.validate()?;
        debug!(prices = menu.prices.len(), "menu config loaded");
        Ok(menu)
    }

    /// Serialises the menu back to JSON.
    pub fn to_json(&self) -> TallyResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn validate(&self) -> TallyResult<()> {
        validate_price_list(&self.prices).map_err(|err| {
            warn!(error = %err, "menu config rejected");
            err.into()
        })
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig {
            prices: DEFAULT_MENU_PRICES.iter().copied().map(Price::new).collect(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
