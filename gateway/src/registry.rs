//! The response registry: one mutex-guarded accumulator struct per
//! request kind (spec.md §3), written only by `demux.rs` and read (and
//! reset before send) by `ops/*.rs`. Grounded in `api/src/order.rs`'s
//! `OrderTracker` and `api/src/ticker.rs`'s `MarketDataTracker`, restructured
//! from channel-receivers to mutex-guarded snapshots to fit the polling
//! model spec.md's wait primitive requires.
use std::collections::HashMap;

use parking_lot::Mutex;

use crate::account::{AccountUpdateSnapshot, Position};
use crate::bars::Bar;
use crate::order::{OpenOrder, OrderStatusUpdate};
use crate::ticker::Tick;
use crate::{ClientId, OrderId, TickerId};

#[derive(Debug, Clone, Default)]
pub struct OrderListMailbox {
    pub complete: bool,
    pub open_orders: Vec<OpenOrder>,
    pub statuses: Vec<OrderStatusUpdate>,
}

#[derive(Debug, Clone, Default)]
pub struct OrderMailbox {
    pub open_order: Option<OpenOrder>,
    pub statuses: Vec<OrderStatusUpdate>,
}

#[derive(Debug, Clone, Default)]
pub struct PositionsMailbox {
    pub complete: bool,
    pub positions: Vec<Position>,
}

#[derive(Debug, Clone, Default)]
pub struct AccountSummaryMailbox {
    pub complete: bool,
    pub values: HashMap<String, (String, String)>, // tag -> (value, currency)
}

#[derive(Debug, Clone, Default)]
pub struct AccountUpdateMailbox {
    pub snapshot: AccountUpdateSnapshot,
    pub download_end_seen: bool,
}

#[derive(Debug, Clone, Default)]
pub struct HistoryMailbox {
    pub complete: bool,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, Default)]
pub struct MarketMailbox {
    pub ticks: Vec<Tick>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ErrorSlot {
    pub code: i32,
    pub message: String,
}

#[derive(Default)]
pub struct Registry {
    pub order_list: Mutex<HashMap<ClientId, OrderListMailbox>>,
    pub order: Mutex<HashMap<OrderId, OrderMailbox>>,
    pub positions: Mutex<HashMap<ClientId, PositionsMailbox>>,
    pub account_summary: Mutex<HashMap<ClientId, AccountSummaryMailbox>>,
    pub account_update: Mutex<HashMap<ClientId, AccountUpdateMailbox>>,
    pub history: Mutex<HashMap<TickerId, HistoryMailbox>>,
    pub market: Mutex<HashMap<TickerId, MarketMailbox>>,
    pub errors: Mutex<HashMap<i64, ErrorSlot>>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    // -- reset-before-send ------------------------------------------------

    pub fn reset_order_list(&self, client_id: ClientId) {
        self.order_list.lock().insert(client_id, OrderListMailbox::default());
    }

    pub fn reset_order(&self, order_id: OrderId) {
        self.order.lock().insert(order_id, OrderMailbox::default());
    }

    pub fn reset_positions(&self, client_id: ClientId) {
        self.positions.lock().insert(client_id, PositionsMailbox::default());
    }

    pub fn reset_account_summary(&self, client_id: ClientId) {
        self.account_summary.lock().insert(client_id, AccountSummaryMailbox::default());
    }

    pub fn reset_account_update(&self, client_id: ClientId) {
        self.account_update.lock().insert(client_id, AccountUpdateMailbox::default());
    }

    pub fn reset_history(&self, ticker_id: TickerId) {
        self.history.lock().insert(ticker_id, HistoryMailbox::default());
    }

    pub fn reset_market(&self, ticker_id: TickerId) {
        self.market.lock().insert(ticker_id, MarketMailbox::default());
    }

    pub fn clear_error(&self, id: i64) {
        self.errors.lock().remove(&id);
    }

    pub fn get_error(&self, id: i64) -> Option<ErrorSlot> {
        self.errors.lock().get(&id).cloned()
    }

    // -- snapshots ----------------------------------------------------------

    pub fn snapshot_order_list(&self, client_id: ClientId) -> OrderListMailbox {
        self.order_list.lock().get(&client_id).cloned().unwrap_or_default()
    }

    pub fn snapshot_order(&self, order_id: OrderId) -> OrderMailbox {
        self.order.lock().get(&order_id).cloned().unwrap_or_default()
    }

    pub fn snapshot_positions(&self, client_id: ClientId) -> PositionsMailbox {
        self.positions.lock().get(&client_id).cloned().unwrap_or_default()
    }

    pub fn snapshot_account_summary(&self, client_id: ClientId) -> AccountSummaryMailbox {
        self.account_summary.lock().get(&client_id).cloned().unwrap_or_default()
    }

    pub fn snapshot_account_update(&self, client_id: ClientId) -> AccountUpdateMailbox {
        self.account_update.lock().get(&client_id).cloned().unwrap_or_default()
    }

    pub fn snapshot_history(&self, ticker_id: TickerId) -> HistoryMailbox {
        self.history.lock().get(&ticker_id).cloned().unwrap_or_default()
    }

    pub fn snapshot_market(&self, ticker_id: TickerId) -> MarketMailbox {
        self.market.lock().get(&ticker_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_prior_state() {
        let reg = Registry::new();
        reg.order.lock().insert(7, OrderMailbox { open_order: None, statuses: vec![] });
        reg.reset_order(7);
        assert!(reg.snapshot_order(7).statuses.is_empty());
    }

    #[test]
    fn error_slot_set_and_cleared() {
        let reg = Registry::new();
        reg.errors.lock().insert(-1, ErrorSlot { code: 502, message: "down".to_string() });
        assert!(reg.get_error(-1).is_some());
        reg.clear_error(-1);
        assert!(reg.get_error(-1).is_none());
    }
}
