//! Fixed-size connection pool: FIFO release ordering, one reserved
//! "order client" slot, 20x250ms pool-wait budget (spec.md §4.1).
//! Grounded in `original_source/connection.py::get_client`/`close_client`
//! (a clientId pool with a timeout loop), recast with `parking_lot`'s
//! `Mutex`+`Condvar` the way the teacher synchronizes shared state.
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Condvar, Mutex};

use crate::connection::Connection;
use crate::error::GatewayError;
use crate::ClientId;

/// The `clientId` reserved exclusively for order placement/cancellation,
/// kept out of the general-purpose `available` rotation.
pub const ORDER_CLIENT_ID: ClientId = 0;

struct Inner {
    all: std::collections::HashMap<ClientId, Arc<Connection>>,
    available: VecDeque<ClientId>,
}

pub struct ClientPool {
    inner: Mutex<Inner>,
    not_empty: Condvar,
    poll_timeout_iters: u32,
}

impl ClientPool {
    pub fn new(connections: Vec<Arc<Connection>>, poll_timeout_iters: u32) -> Arc<Self> {
        let mut all = std::collections::HashMap::new();
        let mut available = VecDeque::new();
        for conn in connections {
            let id = conn.client_id;
            if id != ORDER_CLIENT_ID {
                available.push_back(id);
            }
            all.insert(id, conn);
        }
        Arc::new(ClientPool {
            inner: Mutex::new(Inner { all, available }),
            not_empty: Condvar::new(),
            poll_timeout_iters,
        })
    }

    /// Acquires the reserved order-placement connection directly; it is
    /// never subject to the general FIFO wait.
    pub fn acquire_order_client(self: &Arc<Self>) -> Result<Arc<Connection>, GatewayError> {
        let inner = self.inner.lock();
        inner.all.get(&ORDER_CLIENT_ID).cloned().ok_or(GatewayError::NotConnected)
    }

    /// Acquires any available general-purpose connection, waiting up to
    /// `poll_timeout_iters * 250ms` (spec.md's pool-wait budget) before
    /// returning `PoolExhausted` (`-2`).
    pub fn acquire(self: &Arc<Self>) -> Result<Arc<Connection>, GatewayError> {
        let mut inner = self.inner.lock();
        let budget = Duration::from_millis(250) * self.poll_timeout_iters;
        let deadline = std::time::Instant::now() + budget;
        loop {
            if let Some(id) = inner.available.pop_front() {
                if let Some(conn) = inner.all.get(&id).cloned() {
                    return Ok(conn);
                }
                continue;
            }
            let now = std::time::Instant::now();
            if now >= deadline {
                return Err(GatewayError::PoolExhausted);
            }
            let remaining = deadline - now;
            let timed_out = self.not_empty.wait_for(&mut inner, remaining).timed_out();
            if timed_out && inner.available.is_empty() {
                return Err(GatewayError::PoolExhausted);
            }
        }
    }

    /// Returns a connection to the back of the FIFO queue.
    pub fn release(&self, client_id: ClientId) {
        if client_id == ORDER_CLIENT_ID {
            return;
        }
        let mut inner = self.inner.lock();
        inner.available.push_back(client_id);
        self.not_empty.notify_one();
    }

    pub fn healthcheck(&self) -> Vec<(ClientId, bool)> {
        let inner = self.inner.lock();
        inner.all.values().map(|c| (c.client_id, c.is_connected())).collect()
    }

    pub fn client_ids(&self) -> Vec<ClientId> {
        let inner = self.inner.lock();
        let mut ids: Vec<_> = inner.all.keys().copied().collect();
        ids.sort();
        ids
    }

    /// The clientIds currently checked in and free for `acquire()`, in FIFO
    /// order (the order released means the order they'd be handed out).
    pub fn available_ids(&self) -> Vec<ClientId> {
        let inner = self.inner.lock();
        inner.available.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct Fake(AtomicBool);
    impl crate::connection::Transport for Fake {
        fn send(&self, _cmd: &Command) -> Result<(), GatewayError> {
            Ok(())
        }
        fn is_connected(&self) -> bool {
            self.0.load(Ordering::SeqCst)
        }
    }

    fn conn(id: ClientId) -> Arc<Connection> {
        Arc::new(Connection::new(id, Arc::new(Fake(AtomicBool::new(true)))))
    }

    #[test]
    fn acquire_and_release_round_trips_fifo_order() {
        let pool = ClientPool::new(vec![conn(1), conn(2)], 20);
        let a = pool.acquire().unwrap();
        let b = pool.acquire().unwrap();
        assert_ne!(a.client_id, b.client_id);
        pool.release(a.client_id);
        pool.release(b.client_id);
        let first = pool.acquire().unwrap();
        assert_eq!(first.client_id, a.client_id, "FIFO: first released is first re-acquired");
    }

    #[test]
    fn order_client_is_never_in_general_rotation() {
        let pool = ClientPool::new(vec![conn(ORDER_CLIENT_ID), conn(1)], 20);
        let acquired = pool.acquire().unwrap();
        assert_eq!(acquired.client_id, 1);
        let order_conn = pool.acquire_order_client().unwrap();
        assert_eq!(order_conn.client_id, ORDER_CLIENT_ID);
    }

    #[test]
    fn pool_exhausted_when_nothing_available() {
        let pool = ClientPool::new(vec![conn(1)], 1);
        let _held = pool.acquire().unwrap();
        let err = pool.acquire().unwrap_err();
        assert!(matches!(err, GatewayError::PoolExhausted));
    }
}
