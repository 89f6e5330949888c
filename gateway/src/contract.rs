//! Trimmed from `api/src/contract.rs`. `apply_fields` implements the
//! explicit field-bag population rule spec.md §9 requires in place of
//! the original's `m_`-prefix reflection (`app/sync.py::place_order`).
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::SecType;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contract {
    pub con_id: Option<i32>,
    pub symbol: String,
    #[serde(default)]
    pub sec_type: SecType,
    #[serde(default = "default_exchange")]
    pub exchange: String,
    pub primary_exchange: Option<String>,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub local_symbol: Option<String>,
    pub last_trade_date_or_contract_month: Option<String>,
    pub strike: Option<Decimal>,
    pub right: Option<String>,
    pub multiplier: Option<String>,
    pub trading_class: Option<String>,
}

fn default_exchange() -> String {
    "SMART".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() { None } else { Some(s.to_string()) }
}

impl Contract {
    /// A bare STK/SMART/USD contract for the given symbol, the default
    /// shape `original_source/utils.py::make_contract` builds.
    pub fn stock(symbol: impl Into<String>) -> Self {
        Contract {
            symbol: symbol.into(),
            sec_type: SecType::Stock,
            exchange: default_exchange(),
            currency: default_currency(),
            ..Default::default()
        }
    }

    /// Populate recognized fields from a caller-supplied flat field bag
    /// (e.g. a `POST /order` JSON body), by exact name match. Fields this
    /// contract doesn't recognize are left for `Order::apply_fields`.
    pub fn apply_fields(&mut self, fields: &std::collections::HashMap<String, String>) {
        if let Some(v) = fields.get("symbol") {
            self.symbol = v.clone();
        }
        if let Some(v) = fields.get("secType") {
            if let Ok(t) = v.parse() {
                self.sec_type = t;
            }
        }
        if let Some(v) = fields.get("exchange") {
            self.exchange = v.clone();
        }
        if let Some(v) = fields.get("primaryExchange") {
            self.primary_exchange = Some(v.clone());
        }
        if let Some(v) = fields.get("currency") {
            self.currency = v.clone();
        }
        if let Some(v) = fields.get("localSymbol") {
            self.local_symbol = Some(v.clone());
        }
        if let Some(v) = fields.get("lastTradeDateOrContractMonth") {
            self.last_trade_date_or_contract_month = Some(v.clone());
        }
        if let Some(v) = fields.get("strike") {
            self.strike = v.parse().ok();
        }
        if let Some(v) = fields.get("right") {
            self.right = Some(v.clone());
        }
        if let Some(v) = fields.get("multiplier") {
            self.multiplier = Some(v.clone());
        }
        if let Some(v) = fields.get("tradingClass") {
            self.trading_class = Some(v.clone());
        }
        if let Some(v) = fields.get("conId") {
            self.con_id = v.parse().ok();
        }
    }

    /// Parses the field sequence `encode_fields` produces, in the same
    /// order, from an inbound message's field iterator.
    pub fn decode_fields<'a>(fields: &mut impl Iterator<Item = &'a str>) -> Self {
        let mut next = || fields.next().unwrap_or_default();
        Contract {
            con_id: next().parse().ok(),
            symbol: next().to_string(),
            sec_type: next().parse().unwrap_or_default(),
            last_trade_date_or_contract_month: non_empty(next()),
            strike: next().parse().ok(),
            right: non_empty(next()),
            multiplier: non_empty(next()),
            exchange: {
                let v = next();
                if v.is_empty() { default_exchange() } else { v.to_string() }
            },
            primary_exchange: non_empty(next()),
            currency: {
                let v = next();
                if v.is_empty() { default_currency() } else { v.to_string() }
            },
            local_symbol: non_empty(next()),
            trading_class: non_empty(next()),
        }
    }

    /// Encode as the NUL-separated field sequence the wire layer appends
    /// to outgoing `Command`s that carry a contract.
    pub fn encode_fields(&self) -> Vec<String> {
        vec![
            self.con_id.map(|v| v.to_string()).unwrap_or_default(),
            self.symbol.clone(),
            self.sec_type.to_string(),
            self.last_trade_date_or_contract_month.clone().unwrap_or_default(),
            self.strike.map(|v| v.to_string()).unwrap_or_default(),
            self.right.clone().unwrap_or_default(),
            self.multiplier.clone().unwrap_or_default(),
            self.exchange.clone(),
            self.primary_exchange.clone().unwrap_or_default(),
            self.currency.clone(),
            self.local_symbol.clone().unwrap_or_default(),
            self.trading_class.clone().unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_fields_sets_known_keys_only() {
        let mut c = Contract::stock("AAPL");
        let mut fields = std::collections::HashMap::new();
        fields.insert("exchange".to_string(), "NASDAQ".to_string());
        fields.insert("qty".to_string(), "100".to_string()); // an Order field, ignored here
        c.apply_fields(&fields);
        assert_eq!(c.exchange, "NASDAQ");
        assert_eq!(c.symbol, "AAPL");
    }
}
