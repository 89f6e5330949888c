//! Trimmed from `api/src/ticker.rs`'s `MarketDataTracker` down to the
//! single `Tick` shape `MarketMailbox` accumulates.
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::GatewayError;

/// Real IB API tick-type numbering (`tickPrice`/`tickSize` field ids).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
pub enum TickType {
    BidSize,
    BidPrice,
    AskPrice,
    AskSize,
    Last,
    LastSize,
    High,
    Low,
    Volume,
    Close,
}

impl TickType {
    pub fn from_wire_id(id: i32) -> Result<Self, GatewayError> {
        Ok(match id {
            0 => TickType::BidSize,
            1 => TickType::BidPrice,
            2 => TickType::AskPrice,
            3 => TickType::AskSize,
            4 => TickType::Last,
            5 => TickType::LastSize,
            6 => TickType::High,
            7 => TickType::Low,
            8 => TickType::Volume,
            9 => TickType::Close,
            other => {
                return Err(GatewayError::Upstream {
                    code: 0,
                    message: format!("unrecognized tick type id: {other}"),
                })
            }
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Tick {
    Price { field: TickType, price: f64 },
    Size { field: TickType, size: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_price_is_tick_type_four() {
        assert_eq!(TickType::from_wire_id(4).unwrap(), TickType::Last);
    }
}
