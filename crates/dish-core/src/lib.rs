//! # dish-core: Dish-Price Tally
//!
//! State holder behind a restaurant plate counter: a running total price,
//! a running dish count, and how many dishes of each price were added.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Dish Tally Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI layer (not in this repo)                  │   │
//! │  │    Plate buttons ──► Total display ──► Per-price counters       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                 operations ▲   │ snapshots / events                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ dish-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   price   │  │   tally   │  │ observer  │  │  config   │  │   │
//! │  │   │   Price   │  │ DishTally │  │ TallyEvent│  │ MenuConfig│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • SINGLE-THREADED • OPERATIONS NEVER FAIL             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`price`] - `Price` value type (hashable float)
//! - [`tally`] - `DishTally` and its `TallySnapshot`
//! - [`observer`] - change notification after each operation
//! - [`config`] - menu price list loaded from JSON
//! - [`validation`] - menu price list checks
//! - [`error`] - error types for the config surface
//!
//! ## Example Usage
//!
//! ```rust
//! use dish_core::DishTally;
//!
//! let mut tally = DishTally::new();
//! tally.add_dish(500.0);
//! tally.add_dish(700.0);
//! tally.add_dish(500.0);
//! assert_eq!(tally.total_price().value(), 1700.0);
//! assert_eq!(tally.total_dish_count(), 3);
//!
//! // New bill, same menu
//! tally.clear_total();
//! tally.init_dish_count_map([500.0, 700.0, 900.0]);
//! assert_eq!(tally.total_dish_count(), 0);
//! assert_eq!(tally.dish_count(900.0), 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod observer;
pub mod price;
pub mod tally;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::MenuConfig;
pub use error::{TallyError, TallyResult, ValidationError};
pub use observer::{SubscriptionId, TallyEvent, TallyObserver};
pub use price::Price;
pub use tally::{DishCount, DishTally, TallySnapshot};
