//! Trimmed from `api/src/account.rs` and `api/src/account_summary_tags.rs`.
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::contract::Contract;

/// The closed account-summary tag vocabulary from spec.md §6, matching
/// `app/app.py::AccountSummary`'s parser choices exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
pub enum AccountSummaryTag {
    AccountType,
    NetLiquidation,
    TotalCashValue,
    SettledCash,
    AccruedCash,
    BuyingPower,
    EquityWithLoanValue,
    PreviousDayEquityWithLoanValue,
    GrossPositionValue,
    RegTEquity,
    RegTMargin,
    SMA,
    InitMarginReq,
    MaintMarginReq,
    AvailableFunds,
    ExcessLiquidity,
    Cushion,
    FullInitMarginReq,
    FullMaintMarginReq,
    FullAvailableFunds,
    FullExcessLiquidity,
    LookAheadNextChange,
    LookAheadInitMarginReq,
    LookAheadMaintMarginReq,
    LookAheadAvailableFunds,
    LookAheadExcessLiquidity,
    HighestSeverity,
    DayTradesRemaining,
    Leverage,
}

impl AccountSummaryTag {
    pub const ALL: &'static [AccountSummaryTag] = &[
        AccountSummaryTag::AccountType,
        AccountSummaryTag::NetLiquidation,
        AccountSummaryTag::TotalCashValue,
        AccountSummaryTag::SettledCash,
        AccountSummaryTag::AccruedCash,
        AccountSummaryTag::BuyingPower,
        AccountSummaryTag::EquityWithLoanValue,
        AccountSummaryTag::PreviousDayEquityWithLoanValue,
        AccountSummaryTag::GrossPositionValue,
        AccountSummaryTag::RegTEquity,
        AccountSummaryTag::RegTMargin,
        AccountSummaryTag::SMA,
        AccountSummaryTag::InitMarginReq,
        AccountSummaryTag::MaintMarginReq,
        AccountSummaryTag::AvailableFunds,
        AccountSummaryTag::ExcessLiquidity,
        AccountSummaryTag::Cushion,
        AccountSummaryTag::FullInitMarginReq,
        AccountSummaryTag::FullMaintMarginReq,
        AccountSummaryTag::FullAvailableFunds,
        AccountSummaryTag::FullExcessLiquidity,
        AccountSummaryTag::LookAheadNextChange,
        AccountSummaryTag::LookAheadInitMarginReq,
        AccountSummaryTag::LookAheadMaintMarginReq,
        AccountSummaryTag::LookAheadAvailableFunds,
        AccountSummaryTag::LookAheadExcessLiquidity,
        AccountSummaryTag::HighestSeverity,
        AccountSummaryTag::DayTradesRemaining,
        AccountSummaryTag::Leverage,
    ];

    /// Joins an arbitrary tag set into the comma-joined string
    /// `reqAccountSummary` sends upstream.
    pub fn joined(tags: &[AccountSummaryTag]) -> String {
        tags.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(",")
    }
}

/// A `position` callback entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub account: String,
    pub contract: Contract,
    pub position: Decimal,
    pub avg_cost: Decimal,
}

/// The accumulated state of an in-flight `reqAccountUpdates` subscription:
/// `updateAccountValue` key/value pairs plus `updatePortfolio` positions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountUpdateSnapshot {
    pub account_time: Option<String>,
    pub values: std::collections::HashMap<String, String>,
    pub portfolio: Vec<Position>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_vocabulary_round_trips_through_display_and_parse() {
        for tag in AccountSummaryTag::ALL {
            let s = tag.to_string();
            let parsed: AccountSummaryTag = s.parse().unwrap();
            assert_eq!(*tag, parsed);
        }
    }
}
