//! Trimmed from `api/src/order.rs` (~1900 lines) down to the field set
//! spec.md's `POST /order` and order-status endpoints actually touch.
use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::contract::Contract;
use crate::enums::{Action, OrderStatus, OrderType, TimeInForce};
use crate::{ClientId, OrderId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: Option<OrderId>,
    pub client_id: Option<ClientId>,
    pub action: Action,
    pub order_type: OrderType,
    pub total_quantity: Decimal,
    pub lmt_price: Option<Decimal>,
    /// Stop price for STP/STP LMT orders, or trail stop activation price.
    pub aux_price: Option<Decimal>,
    pub trailing_percent: Option<Decimal>,
    #[serde(default)]
    pub tif: TimeInForce,
    pub good_till_date: Option<String>,
    pub account: Option<String>,
    pub order_ref: Option<String>,
    pub parent_id: Option<OrderId>,
    #[serde(default = "default_transmit")]
    pub transmit: bool,
    #[serde(default)]
    pub outside_rth: bool,
}

fn default_transmit() -> bool {
    true
}

impl Order {
    /// A bare market order skeleton; callers populate the rest via
    /// `apply_fields`.
    pub fn new(action: Action, total_quantity: Decimal) -> Self {
        Order {
            order_id: None,
            client_id: None,
            action,
            order_type: OrderType::Market,
            total_quantity,
            lmt_price: None,
            aux_price: None,
            trailing_percent: None,
            tif: TimeInForce::Day,
            good_till_date: None,
            account: None,
            order_ref: None,
            parent_id: None,
            transmit: true,
            outside_rth: false,
        }
    }

    /// Populate recognized fields from a caller-supplied flat field bag,
    /// by exact name match — the replacement for the original's
    /// `m_`-prefixed reflection (`app/sync.py::place_order`).
    pub fn apply_fields(&mut self, fields: &HashMap<String, String>) {
        if let Some(v) = fields.get("action") {
            if let Ok(a) = v.parse() {
                self.action = a;
            }
        }
        if let Some(v) = fields.get("orderType") {
            if let Ok(t) = v.parse() {
                self.order_type = t;
            }
        }
        if let Some(v) = fields.get("totalQuantity").or_else(|| fields.get("qty")) {
            if let Ok(q) = v.parse() {
                self.total_quantity = q;
            }
        }
        if let Some(v) = fields.get("lmtPrice") {
            self.lmt_price = v.parse().ok();
        }
        if let Some(v) = fields.get("stopPrice").or_else(|| fields.get("auxPrice")) {
            self.aux_price = v.parse().ok();
        }
        if let Some(v) = fields.get("trailingPercent") {
            self.trailing_percent = v.parse().ok();
        }
        if let Some(v) = fields.get("tif") {
            if let Ok(t) = v.parse() {
                self.tif = t;
            }
        }
        if let Some(v) = fields.get("goodTillDate") {
            self.good_till_date = Some(v.clone());
        }
        if let Some(v) = fields.get("account") {
            self.account = Some(v.clone());
        }
        if let Some(v) = fields.get("orderRef") {
            self.order_ref = Some(v.clone());
        }
        if let Some(v) = fields.get("parentId") {
            self.parent_id = v.parse().ok();
        }
        if let Some(v) = fields.get("transmit") {
            if let Ok(t) = v.parse() {
                self.transmit = t;
            }
        }
        if let Some(v) = fields.get("outsideRth") {
            if let Ok(t) = v.parse() {
                self.outside_rth = t;
            }
        }
    }

    /// Parses the field sequence `encode_fields` produces, in the same
    /// order, from an inbound message's field iterator.
    pub fn decode_fields<'a>(fields: &mut impl Iterator<Item = &'a str>) -> Self {
        let mut next = || fields.next().unwrap_or_default();
        Order {
            order_id: None,
            client_id: None,
            action: next().parse().unwrap_or(Action::Buy),
            total_quantity: next().parse().unwrap_or_default(),
            order_type: next().parse().unwrap_or(OrderType::Market),
            lmt_price: next().parse().ok(),
            aux_price: next().parse().ok(),
            tif: next().parse().unwrap_or_default(),
            account: {
                let v = next();
                if v.is_empty() { None } else { Some(v.to_string()) }
            },
            order_ref: {
                let v = next();
                if v.is_empty() { None } else { Some(v.to_string()) }
            },
            transmit: next().parse().unwrap_or(true),
            parent_id: next().parse().ok(),
            trailing_percent: next().parse().ok(),
            outside_rth: next().parse().unwrap_or(false),
            good_till_date: None,
        }
    }

    pub fn encode_fields(&self) -> Vec<String> {
        vec![
            self.action.to_string(),
            self.total_quantity.to_string(),
            self.order_type.to_string(),
            self.lmt_price.map(|v| v.to_string()).unwrap_or_default(),
            self.aux_price.map(|v| v.to_string()).unwrap_or_default(),
            self.tif.to_string(),
            self.account.clone().unwrap_or_default(),
            self.order_ref.clone().unwrap_or_default(),
            self.transmit.to_string(),
            self.parent_id.map(|v| v.to_string()).unwrap_or_default(),
            self.trailing_percent.map(|v| v.to_string()).unwrap_or_default(),
            self.outside_rth.to_string(),
        ]
    }
}

/// An open order as reported by `openOrder`, paired with its contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenOrder {
    pub order_id: OrderId,
    pub contract: Contract,
    pub order: Order,
}

/// An `orderStatus` callback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub order_id: OrderId,
    pub status: OrderStatus,
    pub filled: Decimal,
    pub remaining: Decimal,
    pub avg_fill_price: Decimal,
    pub perm_id: i32,
    pub parent_id: OrderId,
    pub last_fill_price: Decimal,
    pub client_id: ClientId,
    pub why_held: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn apply_fields_parses_trailing_stop_order() {
        let mut o = Order::new(Action::Sell, dec!(0));
        let mut fields = HashMap::new();
        fields.insert("symbol".to_string(), "AAPL".to_string()); // a Contract field, ignored here
        fields.insert("qty".to_string(), "100".to_string());
        fields.insert("stopPrice".to_string(), "9".to_string());
        fields.insert("trailingPercent".to_string(), "1.5".to_string());
        fields.insert("orderType".to_string(), "TRAIL".to_string());
        o.apply_fields(&fields);
        assert_eq!(o.total_quantity, dec!(100));
        assert_eq!(o.aux_price, Some(dec!(9)));
        assert_eq!(o.trailing_percent, Some(dec!(1.5)));
        assert_eq!(o.order_type, OrderType::TrailingStop);
    }
}
