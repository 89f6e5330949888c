//! `GET /order` — grounded in `original_source/app/sync.py::get_open_orders`.
use crate::command::Command;
use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::order::{OpenOrder, OrderStatusUpdate};
use crate::wait::{wait_for, DEFAULT_BUDGET_ITERS};

/// Both arrays spec.md §4.2's `OrderListMailbox` accumulates:
/// every `openOrder` seen, and every `orderStatus` seen, across the
/// whole request (not just the latest status per order).
pub struct OpenOrders {
    pub open_orders: Vec<OpenOrder>,
    pub statuses: Vec<OrderStatusUpdate>,
}

pub fn get_open_orders(gateway: &Gateway) -> Result<OpenOrders, GatewayError> {
    let conn = gateway.pool.acquire()?;
    gateway.registry.reset_order_list(conn.client_id);
    gateway.registry.clear_error(conn.client_id as i64);

    if let Err(e) = conn.send(&Command::ReqAllOpenOrders) {
        gateway.pool.release(conn.client_id);
        return Err(e);
    }

    let outcome = wait_for(&conn, &gateway.registry, conn.client_id as i64, DEFAULT_BUDGET_ITERS, || {
        gateway.registry.snapshot_order_list(conn.client_id).complete
    });

    let snapshot = gateway.registry.snapshot_order_list(conn.client_id);
    gateway.pool.release(conn.client_id);

    super::require_ready(outcome)?;
    Ok(OpenOrders { open_orders: snapshot.open_orders, statuses: snapshot.statuses })
}
