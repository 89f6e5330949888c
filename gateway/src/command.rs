//! Typed outbound command stream the core emits. Grounded in
//! `api/src/cmd/*.rs` (one struct per outgoing message, e.g.
//! `PlaceOrder::into_frame`), trimmed to what spec.md's endpoints send.
use crate::contract::Contract;
use crate::order::Order;
use crate::{ClientId, OrderId, TickerId};

#[derive(Debug, Clone)]
pub enum Command {
    StartApi { client_id: ClientId },
    ReqIds,

    ReqMktData { ticker_id: TickerId, contract: Contract },
    CancelMktData { ticker_id: TickerId },

    ReqHistoricalData {
        ticker_id: TickerId,
        contract: Contract,
        end_date_time: String,
        duration: String,
        bar_size: String,
        what_to_show: String,
        use_rth: bool,
    },
    CancelHistoricalData { ticker_id: TickerId },

    ReqAllOpenOrders,

    PlaceOrder { order_id: OrderId, contract: Contract, order: Order },
    CancelOrder { order_id: OrderId },

    ReqPositions,
    CancelPositions,

    ReqAccountSummary { req_id: ClientId, tags: String },
    CancelAccountSummary { req_id: ClientId },

    ReqAccountUpdates { subscribe: bool, account: String },
}
