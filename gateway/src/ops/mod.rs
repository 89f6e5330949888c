//! Request operations: one file per HTTP endpoint, each following the
//! 8-step skeleton from spec.md §4.3 — acquire, reset, send, wait,
//! snapshot, teardown, release, map-to-response. Grounded one-to-one with
//! `original_source/app/sync.py`'s functions of the same shape
//! (`get_history`, `get_open_orders`, `cancel_order`, `place_order`,
//! `get_portfolio_positions`, `get_account_summary`, `get_account_update`).
pub mod cancel_order;
pub mod clients;
pub mod get_account_summary;
pub mod get_account_update;
pub mod get_history;
pub mod get_market;
pub mod get_open_orders;
pub mod get_positions;
pub mod place_order;

use crate::error::GatewayError;
use crate::wait::WaitOutcome;

/// Maps a `wait_for` outcome to the operation's `Result`, the point at
/// which spec.md §7's error propagation rules apply. A timeout with no
/// upstream error present is not a failure: the caller's already-taken
/// snapshot is returned as whatever partial mailbox contents exist.
pub(crate) fn require_ready(outcome: WaitOutcome) -> Result<(), GatewayError> {
    match outcome {
        WaitOutcome::Ready | WaitOutcome::TimedOut => Ok(()),
        WaitOutcome::Error { code, message } => Err(GatewayError::Upstream { code, message }),
        WaitOutcome::Disconnected => Err(GatewayError::NotConnected),
    }
}
