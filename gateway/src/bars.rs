//! Trimmed from `api/src/bars.rs`; the 2100-line general-purpose date
//! parser `api/src/utils/dateparser.rs` pulled in for timestamp parsing is
//! dropped in favor of the two formats `historicalData` actually emits.
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bar {
    pub time: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub wap: f64,
    pub count: i32,
}

/// Parses the two bar timestamp formats upstream sends: a bare date
/// (`YYYYMMDD`, for daily-or-coarser bar sizes) or a date and time
/// (`YYYYMMDD HH:MM:SS`, for intraday bar sizes).
pub fn parse_bar_time(raw: &str) -> Result<DateTime<Utc>, GatewayError> {
    let raw = raw.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y%m%d %H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&dt));
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y%m%d") {
        return Ok(Utc.from_utc_datetime(&d.and_hms_opt(0, 0, 0).unwrap()));
    }
    Err(GatewayError::Upstream {
        code: 0,
        message: format!("unrecognized bar timestamp: {raw}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_date_only_bars() {
        let t = parse_bar_time("20240102").unwrap();
        assert_eq!(t.format("%Y-%m-%d").to_string(), "2024-01-02");
    }

    #[test]
    fn parses_intraday_bars() {
        let t = parse_bar_time("20240102 09:30:00").unwrap();
        assert_eq!(t.format("%H:%M:%S").to_string(), "09:30:00");
    }
}
