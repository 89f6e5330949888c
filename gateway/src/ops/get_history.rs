//! `GET /history` — per spec.md §9's resolved Open Question, the contract
//! used is built from the caller's own query fields, not a hardcoded
//! symbol (`original_source/app/sync.py::get_history` builds a contract
//! from args and then has a leftover debug line that overwrites it with a
//! hard-coded AAPL contract; treated as a bug, not followed here).
use std::collections::HashMap;

use crate::bars::Bar;
use crate::contract::Contract;
use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::wait::{wait_for, DEFAULT_BUDGET_ITERS};

pub struct HistoryRequest {
    pub fields: HashMap<String, String>,
    pub end_date_time: String,
    pub duration: String,
    pub bar_size: String,
    pub what_to_show: String,
    pub use_rth: bool,
}

pub fn get_history(gateway: &Gateway, req: HistoryRequest) -> Result<Vec<Bar>, GatewayError> {
    let conn = gateway.pool.acquire()?;
    let ticker_id = gateway.ids.next_ticker_id();
    gateway.registry.reset_history(ticker_id);
    gateway.registry.clear_error(ticker_id);

    let mut contract = Contract::default();
    contract.apply_fields(&req.fields);

    let cmd = crate::command::Command::ReqHistoricalData {
        ticker_id,
        contract,
        end_date_time: req.end_date_time,
        duration: req.duration,
        bar_size: req.bar_size,
        what_to_show: req.what_to_show,
        use_rth: req.use_rth,
    };
    if let Err(e) = conn.send(&cmd) {
        gateway.pool.release(conn.client_id);
        return Err(e);
    }

    let outcome = wait_for(&conn, &gateway.registry, ticker_id, DEFAULT_BUDGET_ITERS, || {
        gateway.registry.snapshot_history(ticker_id).complete
    });

    let snapshot = gateway.registry.snapshot_history(ticker_id);
    let _ = conn.send(&crate::command::Command::CancelHistoricalData { ticker_id });
    gateway.pool.release(conn.client_id);

    super::require_ready(outcome)?;
    Ok(snapshot.bars)
}
