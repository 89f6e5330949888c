//! `DELETE /order` — spec.md §9 resolves the error-slot key as the
//! explicit `orderId` argument (not a leftover global, the bug visible in
//! an older variant of `original_source/sync.py::cancel_order`).
use crate::command::Command;
use crate::enums::OrderStatus;
use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::order::{OpenOrder, OrderStatusUpdate};
use crate::registry::ErrorSlot;
use crate::OrderId;

/// The documented `DELETE /order` body shape (spec.md §6): `openOrder` and
/// `orderStatus` as last known, plus `error` when upstream attached one to
/// this `orderId` — which may coexist with a successful cancellation (IB's
/// code 202 "Order Canceled" is informational, not fatal).
#[derive(Debug)]
pub struct CancelOrderResult {
    pub open_order: Option<OpenOrder>,
    pub status: Option<OrderStatusUpdate>,
    pub error: Option<ErrorSlot>,
}

pub fn cancel_order(gateway: &Gateway, order_id: OrderId) -> Result<CancelOrderResult, GatewayError> {
    let conn = gateway.pool.acquire_order_client()?;
    gateway.registry.reset_order(order_id);
    gateway.registry.clear_error(order_id as i64);

    if let Err(e) = conn.send(&Command::CancelOrder { order_id }) {
        gateway.pool.release(conn.client_id);
        return Err(e);
    }

    let outcome = crate::wait::wait_for(
        &conn,
        &gateway.registry,
        order_id as i64,
        crate::wait::DEFAULT_BUDGET_ITERS,
        || {
            gateway
                .registry
                .snapshot_order(order_id)
                .statuses
                .last()
                .map(|s| s.status == OrderStatus::Cancelled || s.status == OrderStatus::ApiCancelled)
                .unwrap_or(false)
        },
    );

    let snapshot = gateway.registry.snapshot_order(order_id);
    let error = gateway.registry.get_error(order_id as i64);
    gateway.pool.release(conn.client_id);

    super::require_ready(outcome)?;
    Ok(CancelOrderResult { open_order: snapshot.open_order, status: snapshot.statuses.last().cloned(), error })
}
