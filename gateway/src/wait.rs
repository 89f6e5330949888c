//! The synchronous polling wait primitive (spec.md §4.4), recast from
//! `original_source/app/sync.py`'s `while ...: time.sleep(0.25)` loops
//! into a typed, reusable function.
use std::thread::sleep;
use std::time::Duration;

use crate::connection::Connection;
use crate::registry::Registry;

pub const POLL_INTERVAL: Duration = Duration::from_millis(250);
/// Default wait budget: 20 iterations * 250ms = 5s.
pub const DEFAULT_BUDGET_ITERS: u32 = 20;
/// `placeOrder`'s tighter budget: 8 iterations * 250ms ≈ 2s.
pub const PLACE_ORDER_BUDGET_ITERS: u32 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome {
    Ready,
    Error { code: i32, message: String },
    Disconnected,
    TimedOut,
}

/// Polls `predicate` every 250ms, up to `budget_iters` times, short-circuiting
/// on an error slot appearing for `error_id` or the connection dropping.
pub fn wait_for(
    conn: &Connection,
    registry: &Registry,
    error_id: i64,
    budget_iters: u32,
    mut predicate: impl FnMut() -> bool,
) -> WaitOutcome {
    for _ in 0..budget_iters {
        if predicate() {
            return WaitOutcome::Ready;
        }
        if let Some(slot) = registry.get_error(error_id) {
            return WaitOutcome::Error { code: slot.code, message: slot.message };
        }
        if !conn.is_connected() {
            return WaitOutcome::Disconnected;
        }
        sleep(POLL_INTERVAL);
    }
    if predicate() {
        return WaitOutcome::Ready;
    }
    WaitOutcome::TimedOut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::Transport;
    use crate::error::GatewayError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct AlwaysUp;
    impl Transport for AlwaysUp {
        fn send(&self, _cmd: &crate::command::Command) -> Result<(), GatewayError> {
            Ok(())
        }
        fn is_connected(&self) -> bool {
            true
        }
    }

    #[test]
    fn returns_ready_as_soon_as_predicate_is_true() {
        let conn = Connection::new(1, Arc::new(AlwaysUp));
        let registry = Registry::new();
        let calls = AtomicUsize::new(0);
        let outcome = wait_for(&conn, &registry, -1, 20, || calls.fetch_add(1, Ordering::SeqCst) >= 2);
        assert_eq!(outcome, WaitOutcome::Ready);
    }

    #[test]
    fn times_out_after_budget_exhausted() {
        let conn = Connection::new(1, Arc::new(AlwaysUp));
        let registry = Registry::new();
        let outcome = wait_for(&conn, &registry, -1, 1, || false);
        assert_eq!(outcome, WaitOutcome::TimedOut);
    }

    #[test]
    fn surfaces_error_slot_immediately() {
        let conn = Connection::new(1, Arc::new(AlwaysUp));
        let registry = Registry::new();
        registry.errors.lock().insert(-1, crate::registry::ErrorSlot { code: 502, message: "down".to_string() });
        let outcome = wait_for(&conn, &registry, -1, 20, || false);
        assert_eq!(outcome, WaitOutcome::Error { code: 502, message: "down".to_string() });
    }
}
