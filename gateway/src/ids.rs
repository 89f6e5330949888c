//! Monotonic identifier allocation, grounded in `api/src/client.rs`'s
//! `next_req_id: AtomicUsize` field.
use std::sync::atomic::{AtomicI64, Ordering};

use crate::{OrderId, TickerId};

/// Process-wide `tickerId`/`orderId` allocation state.
///
/// `tickerId` is a plain counter: every `reqMktData`/`reqHistoricalData`
/// call needs a value nobody has used before. `orderId` is seeded from the
/// upstream's `nextValidId` callback and only ever raised, never reset —
/// raising it locally after every `placeOrder` keeps the gateway's view
/// correct between `nextValidId` callbacks, which upstream only sends once
/// per connection.
pub struct IdentifierState {
    next_ticker_id: AtomicI64,
    next_order_id: AtomicI64,
}

impl IdentifierState {
    pub fn new() -> Self {
        IdentifierState {
            next_ticker_id: AtomicI64::new(1),
            next_order_id: AtomicI64::new(0),
        }
    }

    /// Allocate the next `tickerId`.
    pub fn next_ticker_id(&self) -> TickerId {
        self.next_ticker_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Record the upstream's `nextValidId` callback value, raising our
    /// local counter if the upstream's is higher.
    pub fn observe_next_valid_id(&self, value: OrderId) {
        self.next_order_id.fetch_max(value as i64, Ordering::SeqCst);
    }

    /// Allocate the next `orderId` for a `placeOrder` call.
    pub fn next_order_id(&self) -> OrderId {
        self.next_order_id.fetch_add(1, Ordering::SeqCst) as OrderId
    }
}

impl Default for IdentifierState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_ids_are_unique_and_increasing() {
        let ids = IdentifierState::new();
        let a = ids.next_ticker_id();
        let b = ids.next_ticker_id();
        assert!(b > a);
    }

    #[test]
    fn order_id_seeds_from_next_valid_id_and_only_rises() {
        let ids = IdentifierState::new();
        ids.observe_next_valid_id(100);
        let first = ids.next_order_id();
        assert_eq!(first, 100);
        // a lower nextValidId callback (e.g. stale reconnection) must never
        // roll the counter backwards.
        ids.observe_next_valid_id(50);
        let second = ids.next_order_id();
        assert_eq!(second, 101);
    }
}
