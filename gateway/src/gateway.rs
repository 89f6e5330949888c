//! The long-lived `Gateway` value: pool + registry + identifier state +
//! config, bundled once at startup and handed to every HTTP handler.
use std::sync::Arc;

use crate::config::Config;
use crate::connection::{Connection, SocketTransport};
use crate::demux;
use crate::ids::IdentifierState;
use crate::pool::ClientPool;
use crate::registry::Registry;

pub struct Gateway {
    pub pool: Arc<ClientPool>,
    pub registry: Arc<Registry>,
    pub ids: Arc<IdentifierState>,
    pub config: Config,
}

impl Gateway {
    /// Opens `config.pool_size` upstream connections (client ids
    /// `0..pool_size`, with `0` reserved for order placement), starts the
    /// demultiplexer thread, and returns the bundled gateway.
    pub fn connect(config: Config) -> Result<Self, crate::error::GatewayError> {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut connections = Vec::with_capacity(config.pool_size);
        for client_id in 0..config.pool_size as crate::ClientId {
            let transport =
                SocketTransport::connect(&config.gateway_host, config.gateway_port, client_id, tx.clone())?;
            let conn = Arc::new(Connection::new(client_id, Arc::new(transport)));
            conn.send(&crate::command::Command::StartApi { client_id })?;
            connections.push(conn);
        }

        let registry = Arc::new(Registry::new());
        let ids = Arc::new(IdentifierState::new());
        let pool = ClientPool::new(connections, config.poll_timeout_iters);

        {
            let registry = registry.clone();
            let ids = ids.clone();
            std::thread::spawn(move || {
                if let Err(e) = demux::run(registry, ids, rx) {
                    tracing::error!("demultiplexer exited: {e}");
                }
            });
        }

        Ok(Gateway { pool, registry, ids, config })
    }
}
