//! Domain enums for contracts and orders, trimmed from `api/src/enums.rs`,
//! `api/src/order.rs` and `api/src/contract.rs` down to the vocabulary
//! spec.md's endpoints actually need.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
pub enum SecType {
    #[strum(serialize = "STK")]
    #[serde(rename = "STK")]
    Stock,
    #[strum(serialize = "OPT")]
    #[serde(rename = "OPT")]
    Option,
    #[strum(serialize = "FUT")]
    #[serde(rename = "FUT")]
    Future,
    #[strum(serialize = "IND")]
    #[serde(rename = "IND")]
    Index,
    #[strum(serialize = "CASH")]
    #[serde(rename = "CASH")]
    Cash,
    #[strum(serialize = "BAG")]
    #[serde(rename = "BAG")]
    Combo,
}

impl Default for SecType {
    fn default() -> Self {
        SecType::Stock
    }
}

/// The literal `{BUY, SELL, SSHORT}` vocabulary spec.md (and
/// `original_source/parsers.py`'s `action` help text, "Must be BUY, SELL
/// or SSHORT") requires — note this differs from the teacher's own wire
/// encoding of short sales as `"SSELL"`; spec.md's vocabulary wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "SELL")]
    Sell,
    #[serde(rename = "SSHORT")]
    ShortSell,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Buy => "BUY",
            Action::Sell => "SELL",
            Action::ShortSell => "SSHORT",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Action {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUY" => Ok(Action::Buy),
            "SELL" => Ok(Action::Sell),
            "SSHORT" => Ok(Action::ShortSell),
            other => Err(ParseEnumError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
pub enum OrderType {
    #[strum(serialize = "MKT")]
    #[serde(rename = "MKT")]
    Market,
    #[strum(serialize = "LMT")]
    #[serde(rename = "LMT")]
    Limit,
    #[strum(serialize = "STP")]
    #[serde(rename = "STP")]
    Stop,
    #[strum(serialize = "STP LMT")]
    #[serde(rename = "STP LMT")]
    StopLimit,
    #[strum(serialize = "TRAIL")]
    #[serde(rename = "TRAIL")]
    TrailingStop,
    #[strum(serialize = "TRAIL LIMIT")]
    #[serde(rename = "TRAIL LIMIT")]
    TrailingStopLimit,
    #[strum(serialize = "MOC")]
    #[serde(rename = "MOC")]
    MarketOnClose,
    #[strum(serialize = "MOO")]
    #[serde(rename = "MOO")]
    MarketOnOpen,
    #[strum(serialize = "MIT")]
    #[serde(rename = "MIT")]
    MarketIfTouched,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
pub enum TimeInForce {
    #[strum(serialize = "DAY")]
    #[serde(rename = "DAY")]
    Day,
    #[strum(serialize = "GTC")]
    #[serde(rename = "GTC")]
    GoodTillCancel,
    #[strum(serialize = "IOC")]
    #[serde(rename = "IOC")]
    ImmediateOrCancel,
    #[strum(serialize = "GTD")]
    #[serde(rename = "GTD")]
    GoodTillDate,
}

impl Default for TimeInForce {
    fn default() -> Self {
        TimeInForce::Day
    }
}

/// Upstream order lifecycle states, matching the real IB API's
/// `orderStatus` callback vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
pub enum OrderStatus {
    PendingSubmit,
    PendingCancel,
    PreSubmitted,
    Submitted,
    ApiCancelled,
    Cancelled,
    Filled,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError(pub String);

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized enum value: {}", self.0)
    }
}

impl std::error::Error for ParseEnumError {}
