//! Request/response DTOs for the `actix-web` surface. Grounded in
//! `other_examples/.../marceloleda-web-framework-benchmark/api-actix/src/main.rs`'s
//! `#[derive(Serialize, Deserialize)]` DTO pattern.
use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::account::AccountSummaryTag;
use crate::error::GatewayError;

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(rename = "endDateTime", default)]
    pub end_date_time: String,
    #[serde(default = "default_duration")]
    pub duration: String,
    #[serde(rename = "barSize", default = "default_bar_size")]
    pub bar_size: String,
    #[serde(rename = "whatToShow", default = "default_what_to_show")]
    pub what_to_show: String,
    #[serde(rename = "useRth", default = "default_use_rth")]
    pub use_rth: bool,
    #[serde(flatten)]
    pub contract_fields: HashMap<String, String>,
}

fn default_duration() -> String {
    "1 D".to_string()
}
fn default_bar_size() -> String {
    "1 min".to_string()
}
fn default_what_to_show() -> String {
    "TRADES".to_string()
}
fn default_use_rth() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct DeleteOrderQuery {
    #[serde(rename = "orderId")]
    pub order_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct AccountUpdateQuery {
    #[serde(default)]
    pub account: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Parses `GET /account/summary`'s `tag`/`tags` query parameters
/// (spec.md §6): `tag` may repeat, `tags` may be comma-separated, both may
/// be present and are unioned and deduplicated. Rejects a request with no
/// tags, or any tag outside the closed vocabulary.
pub fn parse_account_summary_tags(query_string: &str) -> Result<Vec<AccountSummaryTag>, GatewayError> {
    let mut tags = Vec::new();
    for pair in query_string.split('&').filter(|p| !p.is_empty()) {
        let (key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let value = percent_decode(raw_value);
        match key {
            "tag" => push_tag(&mut tags, &value)?,
            "tags" => {
                for part in value.split(',').filter(|p| !p.is_empty()) {
                    push_tag(&mut tags, part)?;
                }
            }
            _ => {}
        }
    }
    if tags.is_empty() {
        return Err(GatewayError::Validation("at least one tag is required".to_string()));
    }
    Ok(tags)
}

fn push_tag(tags: &mut Vec<AccountSummaryTag>, raw: &str) -> Result<(), GatewayError> {
    let tag = AccountSummaryTag::from_str(raw)
        .map_err(|_| GatewayError::Validation(format!("unknown account summary tag: {raw}")))?;
    if !tags.contains(&tag) {
        tags.push(tag);
    }
    Ok(())
}

fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                if let Ok(byte) = u8::from_str_radix(&value[i + 1..i + 3], 16) {
                    out.push(byte);
                    i += 3;
                } else {
                    out.push(bytes[i]);
                    i += 1;
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Flattens a JSON object body into a flat string field bag, the shape
/// `Contract::apply_fields`/`Order::apply_fields` consume.
pub fn json_to_field_bag(value: &Value) -> HashMap<String, String> {
    let mut out = HashMap::new();
    if let Value::Object(map) = value {
        for (k, v) in map {
            let s = match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            out.insert(k.clone(), s);
        }
    }
    out
}
