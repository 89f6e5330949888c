//! Fake `Transport` test harness, grounded in the `Transport` trait
//! boundary itself (spec.md §1: the core never parses wire bytes — tests
//! exercise it without a real socket). Layout follows the teacher's
//! `tests/all/integration_tests.rs` structure.
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use ibkr_gateway::command::Command;
use ibkr_gateway::config::Config;
use ibkr_gateway::connection::{Connection, Transport};
use ibkr_gateway::demux;
use ibkr_gateway::error::GatewayError;
use ibkr_gateway::event::Event;
use ibkr_gateway::gateway::Gateway;
use ibkr_gateway::ids::IdentifierState;
use ibkr_gateway::pool::ClientPool;
use ibkr_gateway::registry::Registry;
use ibkr_gateway::ClientId;

pub struct FakeTransport {
    pub sent: Mutex<Vec<Command>>,
    pub connected: AtomicBool,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(FakeTransport { sent: Mutex::new(Vec::new()), connected: AtomicBool::new(true) })
    }
}

impl Transport for FakeTransport {
    fn send(&self, cmd: &Command) -> Result<(), GatewayError> {
        self.sent.lock().unwrap().push(cmd.clone());
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}

/// A test gateway with `pool_size` fake connections (client id `0` is the
/// reserved order client) and direct access to the registry/ids so tests
/// can inject `Event`s exactly as the demultiplexer would apply them.
pub struct TestHarness {
    pub gateway: Gateway,
    pub transports: Vec<Arc<FakeTransport>>,
}

impl TestHarness {
    pub fn new(pool_size: usize) -> Self {
        let mut connections = Vec::new();
        let mut transports = Vec::new();
        for client_id in 0..pool_size as ClientId {
            let transport = FakeTransport::new();
            transports.push(transport.clone());
            connections.push(Arc::new(Connection::new(client_id, transport)));
        }
        let pool = ClientPool::new(connections, 20);
        let registry = Arc::new(Registry::new());
        let ids = Arc::new(IdentifierState::new());
        let gateway = Gateway { pool, registry, ids, config: Config::default() };
        TestHarness { gateway, transports }
    }

    /// Applies an `Event` as if it had arrived on `client_id`'s connection.
    pub fn deliver(&self, client_id: ClientId, event: Event) {
        demux::dispatch(&self.gateway.registry, &self.gateway.ids, client_id, event);
    }
}
