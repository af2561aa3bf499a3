//! # Observer Module
//!
//! Change notification for [`DishTally`](crate::tally::DishTally).
//!
//! The UI re-renders after each tally operation. Instead of framework-level
//! reactivity, the tally calls every subscribed observer once per operation,
//! after the state change is complete.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_dish(500) ──► state updated ──► observer #1 ──► observer #2 ...    │
//! │                                        (event, &tally)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use dish_core::{DishTally, TallyEvent};
//!
//! let renders = Rc::new(Cell::new(0));
//! let seen = Rc::clone(&renders);
//!
//! let mut tally = DishTally::new();
//! tally.subscribe(move |_event: &TallyEvent, _tally: &DishTally| {
//!     seen.set(seen.get() + 1);
//! });
//!
//! tally.add_dish(500.0);
//! tally.clear_total();
//! assert_eq!(renders.get(), 2);
//! ```

use serde::Serialize;
use std::fmt;
use ts_rs::TS;

use crate::price::Price;
use crate::tally::DishTally;

// =============================================================================
// Events
// =============================================================================

/// What just happened to the tally.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TallyEvent {
    /// One dish at `price` was added.
    DishAdded { price: Price },

    /// Totals and histogram were cleared.
    AllCleared,

    /// Totals were cleared, histogram kept.
    TotalCleared,

    /// Histogram was replaced with zero counts.
    CountMapInitialized {
        #[serde(rename = "distinctPrices")]
        distinct_prices: usize,
    },
}

// =============================================================================
// Observer Trait
// =============================================================================

/// Receives a notification after every tally operation.
///
/// Observers get a shared reference: they can read the new state but
/// cannot mutate the tally from inside a notification. Reads made during a
/// notification, `observer_count` included, see the complete tally.
pub trait TallyObserver {
    fn on_change(&mut self, event: &TallyEvent, tally: &DishTally);
}

impl<F> TallyObserver for F
where
    F: FnMut(&TallyEvent, &DishTally),
{
    fn on_change(&mut self, event: &TallyEvent, tally: &DishTally) {
        self(event, tally)
    }
}

/// Handle returned by [`DishTally::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

// =============================================================================
// Registry
// =============================================================================

/// Ordered list of observers owned by one tally.
#[derive(Default)]
pub(crate) struct Observers {
    entries: Vec<ObserverEntry>,
    next_id: u64,
    /// Entries lent out by `begin_dispatch`, still counted by `len`.
    in_flight: usize,
}

pub(crate) type ObserverEntry = (SubscriptionId, Box<dyn TallyObserver>);

impl Observers {
    pub(crate) fn subscribe(&mut self, observer: Box<dyn TallyObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len() + self.in_flight
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lends the observers out so they can be called with a shared borrow of
    /// the owning tally. Must be paired with `end_dispatch`.
    pub(crate) fn begin_dispatch(&mut self) -> Vec<ObserverEntry> {
        let entries = std::mem::take(&mut self.entries);
        self.in_flight = entries.len();
        entries
    }

    pub(crate) fn end_dispatch(&mut self, entries: Vec<ObserverEntry>) {
        self.in_flight = 0;
        self.entries = entries;
    }
}

/// Calls every observer in subscription order.
pub(crate) fn dispatch(entries: &mut [ObserverEntry], event: &TallyEvent, tally: &DishTally) {
    for (_, observer) in entries.iter_mut() {
        observer.on_change(event, tally);
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("len", &self.len())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_ids_are_unique() {
        let mut observers = Observers::default();
        let a = observers.subscribe(Box::new(|_: &TallyEvent, _: &DishTally| {}));
        let b = observers.subscribe(Box::new(|_: &TallyEvent, _: &DishTally| {}));
        assert_ne!(a, b);
        assert_eq!(observers.len(), 2);
    }

    #[test]
    fn test_unsubscribe() {
        let mut observers = Observers::default();
        let id = observers.subscribe(Box::new(|_: &TallyEvent, _: &DishTally| {}));
        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        assert!(observers.is_empty());
    }

    #[test]
    fn test_len_includes_entries_in_dispatch() {
        let mut observers = Observers::default();
        observers.subscribe(Box::new(|_: &TallyEvent, _: &DishTally| {}));
        observers.subscribe(Box::new(|_: &TallyEvent, _: &DishTally| {}));

        let entries = observers.begin_dispatch();
        assert_eq!(observers.len(), 2);
        assert!(!observers.is_empty());
        observers.end_dispatch(entries);
        assert_eq!(observers.len(), 2);
    }

    #[test]
    fn test_event_json_shape() {
        let json = serde_json::to_value(TallyEvent::DishAdded {
            price: Price::new(500.0),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "type": "dishAdded", "price": 500.0 }));

        let json = serde_json::to_value(TallyEvent::DishAdded {
            price: Price::new(f64::INFINITY),
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "dishAdded", "price": "Infinity" })
        );

        let json = serde_json::to_value(TallyEvent::CountMapInitialized { distinct_prices: 3 })
            .unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "countMapInitialized", "distinctPrices": 3 })
        );
    }
}
