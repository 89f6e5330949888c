//! `GET /market/{symbol}` — grounded in `original_source/feeds.py::get_market_data`,
//! whose completion predicate (`while len(g.market_resp) < 5`) sets the
//! minimum-tick count used below.
use crate::contract::Contract;
use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::ticker::Tick;
use crate::wait::{wait_for, DEFAULT_BUDGET_ITERS};

/// Minimum accumulated ticks before a snapshot is considered useful,
/// matching `feeds.py`'s `len(g.market_resp) < 5` loop condition.
const MIN_TICKS: usize = 5;

pub fn get_market(gateway: &Gateway, symbol: &str) -> Result<Vec<Tick>, GatewayError> {
    let conn = gateway.pool.acquire()?;
    let ticker_id = gateway.ids.next_ticker_id();
    gateway.registry.reset_market(ticker_id);
    gateway.registry.clear_error(ticker_id);

    let contract = Contract::stock(symbol);
    let send_result = conn.send(&crate::command::Command::ReqMktData { ticker_id, contract });
    if let Err(e) = send_result {
        gateway.pool.release(conn.client_id);
        return Err(e);
    }

    let outcome = wait_for(&conn, &gateway.registry, ticker_id, DEFAULT_BUDGET_ITERS, || {
        gateway.registry.snapshot_market(ticker_id).ticks.len() >= MIN_TICKS
    });

    let snapshot = gateway.registry.snapshot_market(ticker_id);
    let _ = conn.send(&crate::command::Command::CancelMktData { ticker_id });
    gateway.pool.release(conn.client_id);

    super::require_ready(outcome)?;
    Ok(snapshot.ticks)
}
