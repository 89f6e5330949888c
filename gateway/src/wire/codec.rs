//! Encode/decode between the typed `Command`/`Event` surface and the
//! NUL-separated field lists `wire::io` puts on the wire. Field orders are
//! this crate's own — spec.md scopes the exact upstream wire format out
//! of the core's concern (§1/§6), so this codec defines a self-consistent
//! typed<->bytes mapping rather than reproducing every historical TWS
//! server-version quirk from `api/src/ib_frame.rs`.
use crate::account::Position;
use crate::bars::{parse_bar_time, Bar};
use crate::command::Command;
use crate::contract::Contract;
use crate::error::GatewayError;
use crate::event::Event;
use crate::order::{Order, OrderStatusUpdate};
use crate::ticker::TickType;

use super::frame::{Incoming, Outgoing};

pub fn encode_command(cmd: &Command) -> Vec<String> {
    match cmd {
        Command::StartApi { client_id } => {
            vec![Outgoing::StartApi.id().to_string(), "2".to_string(), client_id.to_string(), String::new()]
        }
        Command::ReqIds => vec![Outgoing::ReqIds.id().to_string(), "1".to_string(), "1".to_string()],
        Command::ReqMktData { ticker_id, contract } => {
            let mut v = vec![Outgoing::ReqMktData.id().to_string(), "11".to_string(), ticker_id.to_string()];
            v.extend(contract.encode_fields());
            v.push(String::new()); // generic tick list
            v.push("false".to_string()); // snapshot
            v
        }
        Command::CancelMktData { ticker_id } => {
            vec![Outgoing::CancelMktData.id().to_string(), "2".to_string(), ticker_id.to_string()]
        }
        Command::ReqHistoricalData {
            ticker_id,
            contract,
            end_date_time,
            duration,
            bar_size,
            what_to_show,
            use_rth,
        } => {
            let mut v = vec![Outgoing::ReqHistoricalData.id().to_string(), "6".to_string(), ticker_id.to_string()];
            v.extend(contract.encode_fields());
            v.push(end_date_time.clone());
            v.push(bar_size.clone());
            v.push(duration.clone());
            v.push(use_rth.to_string());
            v.push(what_to_show.clone());
            v
        }
        Command::CancelHistoricalData { ticker_id } => {
            vec![Outgoing::CancelHistoricalData.id().to_string(), "1".to_string(), ticker_id.to_string()]
        }
        Command::ReqAllOpenOrders => vec![Outgoing::ReqAllOpenOrders.id().to_string(), "1".to_string()],
        Command::PlaceOrder { order_id, contract, order } => {
            let mut v = vec![Outgoing::PlaceOrder.id().to_string(), order_id.to_string()];
            v.extend(contract.encode_fields());
            v.extend(order.encode_fields());
            v
        }
        Command::CancelOrder { order_id } => {
            vec![Outgoing::CancelOrder.id().to_string(), "1".to_string(), order_id.to_string()]
        }
        Command::ReqPositions => vec![Outgoing::ReqPositions.id().to_string(), "1".to_string()],
        Command::CancelPositions => vec![Outgoing::CancelPositions.id().to_string(), "1".to_string()],
        Command::ReqAccountSummary { req_id, tags } => {
            vec![
                Outgoing::ReqAccountSummary.id().to_string(),
                "1".to_string(),
                req_id.to_string(),
                "All".to_string(),
                tags.clone(),
            ]
        }
        Command::CancelAccountSummary { req_id } => {
            vec![Outgoing::CancelAccountSummary.id().to_string(), "1".to_string(), req_id.to_string()]
        }
        Command::ReqAccountUpdates { subscribe, account } => {
            vec![Outgoing::ReqAccountData.id().to_string(), "2".to_string(), subscribe.to_string(), account.clone()]
        }
    }
}

pub fn decode_event(fields: &[String]) -> Result<Event, GatewayError> {
    let mut it = fields.iter().map(String::as_str);
    let id: i32 = it
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| GatewayError::Transport("empty message".to_string()))?;
    let incoming = Incoming::from_id(id)
        .ok_or_else(|| GatewayError::Transport(format!("unrecognized message id {id}")))?;

    match incoming {
        Incoming::ErrMsg => {
            let _version: &str = it.next().unwrap_or_default();
            let req_id: i64 = it.next().and_then(|s| s.parse().ok()).unwrap_or(-1);
            let code: i32 = it.next().and_then(|s| s.parse().ok()).unwrap_or(0);
            let message = it.next().unwrap_or_default().to_string();
            Ok(Event::Error { req_id, code, message })
        }
        Incoming::NextValidId => {
            let _version = it.next();
            let order_id = it.next().and_then(|s| s.parse().ok()).unwrap_or(0);
            Ok(Event::NextValidId { order_id })
        }
        Incoming::ManagedAccts => {
            let _version = it.next();
            let accounts = it.next().unwrap_or_default().split(',').map(|s| s.to_string()).collect();
            Ok(Event::ManagedAccounts { accounts })
        }
        Incoming::TickPrice => {
            let _version = it.next();
            let ticker_id = it.next().and_then(|s| s.parse().ok()).unwrap_or(0);
            let field_id: i32 = it.next().and_then(|s| s.parse().ok()).unwrap_or(0);
            let price: f64 = it.next().and_then(|s| s.parse().ok()).unwrap_or(0.0);
            Ok(Event::TickPrice { ticker_id, field: TickType::from_wire_id(field_id)?, price })
        }
        Incoming::TickSize => {
            let _version = it.next();
            let ticker_id = it.next().and_then(|s| s.parse().ok()).unwrap_or(0);
            let field_id: i32 = it.next().and_then(|s| s.parse().ok()).unwrap_or(0);
            let size: f64 = it.next().and_then(|s| s.parse().ok()).unwrap_or(0.0);
            Ok(Event::TickSize { ticker_id, field: TickType::from_wire_id(field_id)?, size })
        }
        Incoming::HistoricalData => {
            let req_id = it.next().and_then(|s| s.parse().ok()).unwrap_or(0);
            let date = it.next().unwrap_or_default();
            if date.starts_with("finished") {
                return Ok(Event::HistoricalDataEnd { req_id });
            }
            let time = parse_bar_time(date)?;
            let open: f64 = it.next().and_then(|s| s.parse().ok()).unwrap_or(0.0);
            let high: f64 = it.next().and_then(|s| s.parse().ok()).unwrap_or(0.0);
            let low: f64 = it.next().and_then(|s| s.parse().ok()).unwrap_or(0.0);
            let close: f64 = it.next().and_then(|s| s.parse().ok()).unwrap_or(0.0);
            let volume: f64 = it.next().and_then(|s| s.parse().ok()).unwrap_or(0.0);
            let wap: f64 = it.next().and_then(|s| s.parse().ok()).unwrap_or(0.0);
            let count: i32 = it.next().and_then(|s| s.parse().ok()).unwrap_or(0);
            Ok(Event::HistoricalDataBar {
                req_id,
                bar: Bar { time, open, high, low, close, volume, wap, count },
            })
        }
        Incoming::OpenOrder => {
            let _version = it.next();
            let order_id = it.next().and_then(|s| s.parse().ok()).unwrap_or(0);
            let contract = Contract::decode_fields(&mut it);
            let order = Order::decode_fields(&mut it);
            Ok(Event::OpenOrder { order_id, contract, order })
        }
        Incoming::OrderStatus => {
            let _version = it.next();
            let order_id = it.next().and_then(|s| s.parse().ok()).unwrap_or(0);
            let status = it.next().and_then(|s| s.parse().ok()).unwrap_or(crate::enums::OrderStatus::Inactive);
            let filled = it.next().and_then(|s| s.parse().ok()).unwrap_or_default();
            let remaining = it.next().and_then(|s| s.parse().ok()).unwrap_or_default();
            let avg_fill_price = it.next().and_then(|s| s.parse().ok()).unwrap_or_default();
            let perm_id = it.next().and_then(|s| s.parse().ok()).unwrap_or(0);
            let parent_id = it.next().and_then(|s| s.parse().ok()).unwrap_or(0);
            let last_fill_price = it.next().and_then(|s| s.parse().ok()).unwrap_or_default();
            let client_id = it.next().and_then(|s| s.parse().ok()).unwrap_or(0);
            let why_held = it.next().unwrap_or_default().to_string();
            Ok(Event::OrderStatus(OrderStatusUpdate {
                order_id,
                status,
                filled,
                remaining,
                avg_fill_price,
                perm_id,
                parent_id,
                last_fill_price,
                client_id,
                why_held,
            }))
        }
        Incoming::OpenOrderEnd => Ok(Event::OpenOrderEnd),
        Incoming::PositionData => {
            let _version = it.next();
            let account = it.next().unwrap_or_default().to_string();
            let contract = Contract::decode_fields(&mut it);
            let position = it.next().and_then(|s| s.parse().ok()).unwrap_or_default();
            let avg_cost = it.next().and_then(|s| s.parse().ok()).unwrap_or_default();
            Ok(Event::Position(Position { account, contract, position, avg_cost }))
        }
        Incoming::PositionEnd => Ok(Event::PositionEnd),
        Incoming::AcctValue => {
            let _version = it.next();
            let key = it.next().unwrap_or_default().to_string();
            let value = it.next().unwrap_or_default().to_string();
            let currency = it.next().unwrap_or_default().to_string();
            let account = it.next().unwrap_or_default().to_string();
            Ok(Event::UpdateAccountValue { key, value, currency, account })
        }
        Incoming::PortfolioValue => {
            let _version = it.next();
            let contract = Contract::decode_fields(&mut it);
            let position = it.next().and_then(|s| s.parse().ok()).unwrap_or_default();
            let _market_price: f64 = it.next().and_then(|s| s.parse().ok()).unwrap_or(0.0);
            let _market_value: f64 = it.next().and_then(|s| s.parse().ok()).unwrap_or(0.0);
            let avg_cost = it.next().and_then(|s| s.parse().ok()).unwrap_or_default();
            let _unrealized: f64 = it.next().and_then(|s| s.parse().ok()).unwrap_or(0.0);
            let _realized: f64 = it.next().and_then(|s| s.parse().ok()).unwrap_or(0.0);
            let account = it.next().unwrap_or_default().to_string();
            Ok(Event::UpdatePortfolio(Position { account, contract, position, avg_cost }))
        }
        Incoming::AcctUpdateTime => {
            let _version = it.next();
            let timestamp = it.next().unwrap_or_default().to_string();
            Ok(Event::UpdateAccountTime { timestamp })
        }
        Incoming::AcctDownloadEnd => {
            let _version = it.next();
            let account = it.next().unwrap_or_default().to_string();
            Ok(Event::AccountDownloadEnd { account })
        }
        Incoming::AccountSummary => {
            let _version = it.next();
            let req_id = it.next().and_then(|s| s.parse().ok()).unwrap_or(0);
            let account = it.next().unwrap_or_default().to_string();
            let tag = it.next().unwrap_or_default().to_string();
            let value = it.next().unwrap_or_default().to_string();
            let currency = it.next().unwrap_or_default().to_string();
            Ok(Event::AccountSummary { req_id, account, tag, value, currency })
        }
        Incoming::AccountSummaryEnd => {
            let _version = it.next();
            let req_id = it.next().and_then(|s| s.parse().ok()).unwrap_or(0);
            Ok(Event::AccountSummaryEnd { req_id })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_place_order_with_leading_outgoing_id() {
        let cmd = Command::PlaceOrder {
            order_id: 7,
            contract: Contract::stock("AAPL"),
            order: Order::new(crate::enums::Action::Buy, rust_decimal_macros::dec!(10)),
        };
        let fields = encode_command(&cmd);
        assert_eq!(fields[0], Outgoing::PlaceOrder.id().to_string());
        assert_eq!(fields[1], "7");
    }

    #[test]
    fn decodes_next_valid_id() {
        let fields = vec!["9".to_string(), "1".to_string(), "55".to_string()];
        match decode_event(&fields).unwrap() {
            Event::NextValidId { order_id } => assert_eq!(order_id, 55),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn decodes_connection_level_error_with_sentinel_req_id() {
        let fields = vec!["4".to_string(), "2".to_string(), "-1".to_string(), "502".to_string(), "Couldn't connect to TWS".to_string()];
        match decode_event(&fields).unwrap() {
            Event::Error { req_id, code, .. } => {
                assert_eq!(req_id, -1);
                assert_eq!(code, 502);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
