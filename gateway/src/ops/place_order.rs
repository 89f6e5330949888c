//! `POST /order` — grounded in `original_source/app/sync.py::place_order`.
//! Field population uses `Contract::apply_fields`/`Order::apply_fields`
//! (spec.md §9), not the original's `m_`-prefix reflection.
use std::collections::HashMap;

use crate::command::Command;
use crate::contract::Contract;
use crate::enums::Action;
use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::order::{OpenOrder, Order, OrderStatusUpdate};
use crate::wait::{wait_for, PLACE_ORDER_BUDGET_ITERS};
use crate::OrderId;

/// The documented `POST /order` body shape (spec.md §6): `orderId` plus
/// whatever `openOrder`/`orderStatus` the order client observed within the
/// tight placeOrder budget.
pub struct PlaceOrderResult {
    pub order_id: OrderId,
    pub open_order: Option<OpenOrder>,
    pub status: Option<OrderStatusUpdate>,
}

pub fn place_order(
    gateway: &Gateway,
    action: Action,
    total_quantity: rust_decimal::Decimal,
    fields: &HashMap<String, String>,
) -> Result<PlaceOrderResult, GatewayError> {
    let conn = gateway.pool.acquire_order_client()?;
    let order_id = gateway.ids.next_order_id();

    let mut contract = Contract::default();
    contract.apply_fields(fields);
    let mut order = Order::new(action, total_quantity);
    order.apply_fields(fields);
    order.order_id = Some(order_id);
    order.client_id = Some(conn.client_id);

    gateway.registry.reset_order(order_id);
    gateway.registry.clear_error(order_id as i64);

    let cmd = Command::PlaceOrder { order_id, contract, order };
    if let Err(e) = conn.send(&cmd) {
        gateway.pool.release(conn.client_id);
        return Err(e);
    }

    let outcome = wait_for(&conn, &gateway.registry, order_id as i64, PLACE_ORDER_BUDGET_ITERS, || {
        !gateway.registry.snapshot_order(order_id).statuses.is_empty()
    });

    let snapshot = gateway.registry.snapshot_order(order_id);
    gateway.pool.release(conn.client_id);

    super::require_ready(outcome)?;
    Ok(PlaceOrderResult { order_id, open_order: snapshot.open_order, status: snapshot.statuses.last().cloned() })
}
