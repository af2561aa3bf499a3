//! # Dish Tally
//!
//! Running total price, running dish count, and a per-price histogram.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tally Operations                                     │
//! │                                                                         │
//! │  UI Action               Operation               State Change           │
//! │  ─────────               ─────────               ────────────           │
//! │                                                                         │
//! │  Tap plate ────────────► add_dish(p) ──────────► total += p, count += 1 │
//! │                                                  counts[p] += 1         │
//! │                                                                         │
//! │  Reset everything ─────► clear_all() ──────────► total = 0, count = 0   │
//! │                                                  counts = {}            │
//! │                                                                         │
//! │  New bill ─────────────► clear_total() ────────► total = 0, count = 0   │
//! │                                                  (counts kept)          │
//! │                                                                         │
//! │  Menu loaded ──────────► init_dish_count_map() ► counts = {p: 0, ...}   │
//! │                                                  (totals kept)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `total_dish_count` equals the sum of the histogram, except after
//!   `init_dish_count_map` re-seeds the histogram while totals are non-zero.
//!   Callers wanting a full reset run `clear_total` then `init_dish_count_map`.
//! - No operation fails or panics, whatever the price.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use crate::config::MenuConfig;
use crate::observer::{dispatch, Observers, SubscriptionId, TallyEvent, TallyObserver};
use crate::price::Price;

// =============================================================================
// DishTally
// =============================================================================

/// The tally state plus its four mutating operations.
///
/// Fields are private; reads go through the accessors and every change goes
/// through an operation, so observers never miss a mutation.
#[derive(Debug, Default)]
pub struct DishTally {
    total_price: Price,
    total_dish_count: u64,
    dish_counts: HashMap<Price, u64>,
    observers: Observers,
}

impl DishTally {
    /// Creates an empty tally: zero totals, empty histogram.
    pub fn new() -> Self {
        DishTally::default()
    }

    /// Creates a tally whose histogram is seeded with the menu prices.
    ///
    /// ## Example
    /// ```rust
    /// use dish_core::{DishTally, MenuConfig};
    ///
    /// let menu = MenuConfig::from_json(r#"{ "prices": [500, 700] }"#).unwrap();
    /// let tally = DishTally::with_menu(&menu);
    /// assert_eq!(tally.dish_count_map().len(), 2);
    /// assert_eq!(tally.dish_count(500.0), 0);
    /// ```
    pub fn with_menu(menu: &MenuConfig) -> Self {
        let mut tally = DishTally::new();
        tally.init_dish_count_map(menu.prices.iter().copied());
        tally
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Sum of all prices added since the last reset.
    #[inline]
    pub fn total_price(&self) -> Price {
        self.total_price
    }

    /// Number of dishes added since the last reset.
    #[inline]
    pub fn total_dish_count(&self) -> u64 {
        self.total_dish_count
    }

    /// The price histogram.
    #[inline]
    pub fn dish_count_map(&self) -> &HashMap<Price, u64> {
        &self.dish_counts
    }

    /// Count for one price; 0 when the price is not in the histogram.
    pub fn dish_count(&self, price: impl Into<Price>) -> u64 {
        let price: Price = price.into();
        self.dish_counts.get(&price).copied().unwrap_or_default()
    }

    /// Serialisable view of the current state, for the UI.
    pub fn snapshot(&self) -> TallySnapshot {
        TallySnapshot::from(self)
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Records one dish at `price`.
    ///
    /// Any number is accepted as given: negative, zero, fractional,
    /// infinite and NaN prices all flow into the totals arithmetically.
    ///
    /// ## Example
    /// ```rust
    /// use dish_core::DishTally;
    ///
    /// let mut tally = DishTally::new();
    /// tally.add_dish(500.0);
    /// tally.add_dish(700.0);
    /// tally.add_dish(500.0);
    ///
    /// assert_eq!(tally.total_price().value(), 1700.0);
    /// assert_eq!(tally.total_dish_count(), 3);
    /// assert_eq!(tally.dish_count(500.0), 2);
    /// assert_eq!(tally.dish_count(700.0), 1);
    /// ```
    pub fn add_dish(&mut self, price: impl Into<Price>) {
        let price = price.into();

        self.total_price += price;
        self.total_dish_count = self.total_dish_count.saturating_add(1);
        let count = self.dish_counts.entry(price).or_insert(0);
        *count = count.saturating_add(1);

        debug!(
            price = %price,
            price_count = *count,
            total_price = %self.total_price,
            total_dish_count = self.total_dish_count,
            "dish added"
        );
        self.notify(TallyEvent::DishAdded { price });
    }

    /// Resets both totals and empties the histogram.
    pub fn clear_all(&mut self) {
        self.total_price = Price::zero();
        self.total_dish_count = 0;
        self.dish_counts.clear();

        info!("tally cleared");
        self.notify(TallyEvent::AllCleared);
    }

    /// Resets both totals; the histogram keeps its keys and counts.
    pub fn clear_total(&mut self) {
        self.total_price = Price::zero();
        self.total_dish_count = 0;

        info!(distinct_prices = self.dish_counts.len(), "totals cleared");
        self.notify(TallyEvent::TotalCleared);
    }

    /// Replaces the histogram with one zero-count entry per distinct price.
    ///
    /// Totals are left untouched; call [`clear_total`](Self::clear_total)
    /// first for a full reset.
    ///
    /// ## Example
    /// ```rust
    /// use dish_core::DishTally;
    ///
    /// let mut tally = DishTally::new();
    /// tally.init_dish_count_map([300.0, 300.0, 300.0]);
    /// assert_eq!(tally.dish_count_map().len(), 1);
    /// assert_eq!(tally.dish_count(300.0), 0);
    /// ```
    pub fn init_dish_count_map<I>(&mut self, prices: I)
    where
        I: IntoIterator,
        I::Item: Into<Price>,
    {
        self.dish_counts.clear();
        for price in prices {
            self.dish_counts.insert(price.into(), 0);
        }

        let distinct_prices = self.dish_counts.len();
        info!(distinct_prices, "dish count map initialized");
        self.notify(TallyEvent::CountMapInitialized { distinct_prices });
    }

    // -------------------------------------------------------------------------
    // Observers
    // -------------------------------------------------------------------------

    /// Registers an observer called after every operation.
    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: TallyObserver + 'static,
    {
        self.observers.subscribe(Box::new(observer))
    }

    /// Removes an observer. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Number of subscribed observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&mut self, event: TallyEvent) {
        if self.observers.is_empty() {
            return;
        }
        // Observers read `self`, so they are lent out for the duration.
        let mut entries = self.observers.begin_dispatch();
        dispatch(&mut entries, &event, self);
        self.observers.end_dispatch(entries);
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// One histogram row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DishCount {
    pub price: Price,
    #[ts(type = "number")]
    pub count: u64,
}

/// Read model of a [`DishTally`] handed to the UI.
///
/// `dish_counts` is sorted ascending by price so the display order is
/// stable across renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TallySnapshot {
    pub total_price: Price,
    #[ts(type = "number")]
    pub total_dish_count: u64,
    pub dish_counts: Vec<DishCount>,
}

impl From<&DishTally> for TallySnapshot {
    fn from(tally: &DishTally) -> Self {
        let mut dish_counts: Vec<DishCount> = tally
            .dish_counts
            .iter()
            .map(|(price, count)| DishCount {
                price: *price,
                count: *count,
            })
            .collect();
        dish_counts.sort_by(|a, b| a.price.cmp(&b.price));

        TallySnapshot {
            total_price: tally.total_price,
            total_dish_count: tally.total_dish_count,
            dish_counts,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
