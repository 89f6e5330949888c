//! `GET /account/update` — spec.md §9 resolves the Open Question: teardown
//! is `cancelAccountUpdates`, not `cancelAccountSummary`.
//! **[SUPPLEMENT]** `original_source/app/sync.py::get_account_update` calls
//! `cancelAccountSummary(client_id)` instead, the bug spec.md's note
//! refers to; corrected here.
use crate::account::AccountUpdateSnapshot;
use crate::command::Command;
use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::wait::{wait_for, DEFAULT_BUDGET_ITERS};

pub fn get_account_update(gateway: &Gateway, account: &str) -> Result<AccountUpdateSnapshot, GatewayError> {
    let conn = gateway.pool.acquire()?;
    gateway.registry.reset_account_update(conn.client_id);
    gateway.registry.clear_error(conn.client_id as i64);

    let cmd = Command::ReqAccountUpdates { subscribe: true, account: account.to_string() };
    if let Err(e) = conn.send(&cmd) {
        gateway.pool.release(conn.client_id);
        return Err(e);
    }

    let outcome = wait_for(&conn, &gateway.registry, conn.client_id as i64, DEFAULT_BUDGET_ITERS, || {
        gateway.registry.snapshot_account_update(conn.client_id).download_end_seen
    });

    let snapshot = gateway.registry.snapshot_account_update(conn.client_id);
    let _ = conn.send(&Command::ReqAccountUpdates { subscribe: false, account: account.to_string() });
    gateway.pool.release(conn.client_id);

    super::require_ready(outcome)?;
    Ok(snapshot.snapshot)
}
