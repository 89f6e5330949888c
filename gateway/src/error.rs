//! A single error currency used from the core up through the HTTP layer,
//! one `#[derive(thiserror::Error)]` enum per concern the way
//! `ib_frame::ParseError` and `utils::ib_message::IbDecodeError` do it
//! upstream.
use crate::{ClientId, OrderId, TickerId};

/// The two error sentinels `globals.py`'s `error_resp` seeds at startup,
/// reused verbatim so HTTP bodies match the original wording.
pub const NOT_CONNECTED_ID: i64 = -1;
pub const POOL_TIMEOUT_ID: i64 = -2;

#[derive(thiserror::Error, Debug, Clone)]
pub enum GatewayError {
    #[error("Couldn't connect to TWS")]
    NotConnected,

    #[error("Client ID not available in time. Try request later")]
    PoolExhausted,

    #[error("upstream error {code}: {message}")]
    Upstream { code: i32, message: String },

    #[error("no open order with id {0}")]
    UnknownOrder(OrderId),

    #[error("no such client id {0}")]
    UnknownClient(ClientId),

    #[error("no such ticker id {0}")]
    UnknownTicker(TickerId),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("transport error: {0}")]
    Transport(String),
}

impl GatewayError {
    /// HTTP status mapping per spec: 200 on success, 400 on validation
    /// failure or upstream rejection, 429 on pool exhaustion.
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::PoolExhausted => 429,
            GatewayError::NotConnected
            | GatewayError::Upstream { .. }
            | GatewayError::UnknownOrder(_)
            | GatewayError::UnknownClient(_)
            | GatewayError::UnknownTicker(_)
            | GatewayError::Validation(_)
            | GatewayError::Transport(_) => 400,
        }
    }
}
