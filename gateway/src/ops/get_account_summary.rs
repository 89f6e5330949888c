//! `GET /account/summary` — grounded in
//! `original_source/app/sync.py::get_account_summary`, keyed by `client_id`
//! as the `reqId` (spec.md's preferred redesign for this singleton
//! mailbox) and torn down with `cancelAccountSummary`. Tag validation
//! (closed vocabulary, at least one required) happens in
//! `http::dto::parse_account_summary_tags` before this op ever runs.
use std::collections::HashMap;

use crate::account::AccountSummaryTag;
use crate::command::Command;
use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::wait::{wait_for, DEFAULT_BUDGET_ITERS};

pub struct AccountSummaryResult {
    /// tag name -> value, spec.md §6's flat `{tag: value, ...}` shape.
    pub values: HashMap<String, String>,
    pub complete: bool,
}

pub fn get_account_summary(
    gateway: &Gateway,
    tags: &[AccountSummaryTag],
) -> Result<AccountSummaryResult, GatewayError> {
    let conn = gateway.pool.acquire()?;
    let req_id = conn.client_id;
    gateway.registry.reset_account_summary(req_id);
    gateway.registry.clear_error(req_id as i64);

    let cmd = Command::ReqAccountSummary { req_id, tags: AccountSummaryTag::joined(tags) };
    if let Err(e) = conn.send(&cmd) {
        gateway.pool.release(conn.client_id);
        return Err(e);
    }

    let outcome = wait_for(&conn, &gateway.registry, req_id as i64, DEFAULT_BUDGET_ITERS, || {
        gateway.registry.snapshot_account_summary(req_id).complete
    });

    let snapshot = gateway.registry.snapshot_account_summary(req_id);
    let _ = conn.send(&Command::CancelAccountSummary { req_id });
    gateway.pool.release(conn.client_id);

    super::require_ready(outcome)?;
    let values = snapshot.values.into_iter().map(|(tag, (value, _currency))| (tag, value)).collect();
    Ok(AccountSummaryResult { values, complete: snapshot.complete })
}
