//! `Transport` trait boundary plus the concrete socket implementation and
//! the `Connection` wrapper the pool hands out. Grounded in
//! `api/src/client.rs` (connection ownership, per-event dispatch) and
//! `api/src/blocking_client.rs` — here inverted: the core is synchronous,
//! the HTTP facade above it is async.
use std::net::TcpStream;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::Sender;

use crate::command::Command;
use crate::error::GatewayError;
use crate::event::Event;
use crate::wire::io::{Reader, Writer};
use crate::wire::{decode_event, encode_command};
use crate::ClientId;

/// A collaborator that can carry `Command`s to the upstream Gateway and
/// report whether the underlying session is still alive. The core
/// (`pool.rs`, `registry.rs`, `ops/*.rs`) depends only on this trait, never
/// on wire bytes — satisfying spec.md §1's "the core does not parse wire
/// bytes."
pub trait Transport: Send + Sync {
    fn send(&self, cmd: &Command) -> Result<(), GatewayError>;
    fn is_connected(&self) -> bool;
}

/// A live upstream session bound to one `ClientId`.
pub struct Connection {
    pub client_id: ClientId,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

impl Connection {
    pub fn new(client_id: ClientId, transport: Arc<dyn Transport>) -> Self {
        Connection { client_id, transport }
    }

    pub fn send(&self, cmd: &Command) -> Result<(), GatewayError> {
        self.transport.send(cmd)
    }

    pub fn is_connected(&self) -> bool {
        self.transport.is_connected()
    }
}

/// Real TCP socket transport, using the length-prefixed NUL-separated
/// framing in `wire::io`. A background OS thread owns the read half and
/// forwards decoded `Event`s (tagged with this connection's `client_id`)
/// onto the shared event bus the demultiplexer drains.
pub struct SocketTransport {
    writer: parking_lot::Mutex<Writer>,
    connected: Arc<AtomicBool>,
}

impl SocketTransport {
    /// Performs the API handshake (`API\0`, start-api version negotiation)
    /// and spawns the inbound reader thread.
    pub fn connect(
        host: &str,
        port: u16,
        client_id: ClientId,
        bus: Sender<(ClientId, Event)>,
    ) -> Result<Self, GatewayError> {
        let stream = TcpStream::connect((host, port))
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        let read_stream = stream.try_clone().map_err(|e| GatewayError::Transport(e.to_string()))?;

        let mut writer = Writer::new(stream);
        writer
            .write_fields(&["API\0".to_string()])
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let connected = Arc::new(AtomicBool::new(true));
        let thread_connected = connected.clone();
        thread::spawn(move || {
            let mut reader = Reader::new(read_stream);
            loop {
                match reader.read_fields() {
                    Ok(fields) => match decode_event(&fields) {
                        Ok(event) => {
                            if bus.send((client_id, event)).is_err() {
                                break;
                            }
                        }
                        Err(e) => {
                            tracing::warn!("failed to decode upstream message: {e}");
                        }
                    },
                    Err(e) => {
                        tracing::warn!(client_id, "upstream connection closed: {e}");
                        thread_connected.store(false, Ordering::SeqCst);
                        break;
                    }
                }
            }
        });

        Ok(SocketTransport { writer: parking_lot::Mutex::new(writer), connected })
    }
}

impl Transport for SocketTransport {
    fn send(&self, cmd: &Command) -> Result<(), GatewayError> {
        if !self.is_connected() {
            return Err(GatewayError::NotConnected);
        }
        let fields = encode_command(cmd);
        self.writer
            .lock()
            .write_fields(&fields)
            .map_err(|e| GatewayError::Transport(e.to_string()))
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}
