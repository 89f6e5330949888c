//! `GET /account/positions` — grounded in
//! `original_source/app/sync.py::get_portfolio_positions`, which tears
//! down with `cancelPositions()`.
use crate::account::Position;
use crate::command::Command;
use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::wait::{wait_for, DEFAULT_BUDGET_ITERS};

pub fn get_positions(gateway: &Gateway) -> Result<Vec<Position>, GatewayError> {
    let conn = gateway.pool.acquire()?;
    gateway.registry.reset_positions(conn.client_id);
    gateway.registry.clear_error(conn.client_id as i64);

    if let Err(e) = conn.send(&Command::ReqPositions) {
        gateway.pool.release(conn.client_id);
        return Err(e);
    }

    let outcome = wait_for(&conn, &gateway.registry, conn.client_id as i64, DEFAULT_BUDGET_ITERS, || {
        gateway.registry.snapshot_positions(conn.client_id).complete
    });

    let snapshot = gateway.registry.snapshot_positions(conn.client_id);
    let _ = conn.send(&Command::CancelPositions);
    gateway.pool.release(conn.client_id);

    super::require_ready(outcome)?;
    Ok(snapshot.positions)
}
