//! Typed inbound event stream the core consumes — the boundary that keeps
//! the correlation engine ignorant of wire bytes (spec.md §1). Grounded in
//! `api/src/ib_frame.rs::IBFrame`, trimmed to the variants `demux.rs`'s
//! routing table (spec.md §4.2) actually dispatches.
use crate::account::Position;
use crate::bars::Bar;
use crate::contract::Contract;
use crate::order::{Order, OrderStatusUpdate};
use crate::ticker::TickType;
use crate::{ClientId, OrderId, TickerId};

#[derive(Debug, Clone)]
pub enum Event {
    NextValidId { order_id: OrderId },
    ManagedAccounts { accounts: Vec<String> },
    /// `req_id` is `-1` for a connection-level error (no in-flight request
    /// to blame), matching `globals.py`'s `-1`/`-2` sentinel convention.
    Error { req_id: i64, code: i32, message: String },

    TickPrice { ticker_id: TickerId, field: TickType, price: f64 },
    TickSize { ticker_id: TickerId, field: TickType, size: f64 },

    HistoricalDataBar { req_id: TickerId, bar: Bar },
    HistoricalDataEnd { req_id: TickerId },

    OpenOrder { order_id: OrderId, contract: Contract, order: Order },
    OrderStatus(OrderStatusUpdate),
    OpenOrderEnd,

    Position(Position),
    PositionEnd,

    AccountSummary { req_id: ClientId, account: String, tag: String, value: String, currency: String },
    AccountSummaryEnd { req_id: ClientId },

    UpdateAccountValue { key: String, value: String, currency: String, account: String },
    UpdatePortfolio(Position),
    UpdateAccountTime { timestamp: String },
    AccountDownloadEnd { account: String },
}
