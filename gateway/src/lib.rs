#![warn(
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::upper_case_acronyms)]

use chrono::{DateTime, Utc};

pub mod account;
pub mod bars;
pub mod command;
pub mod config;
pub mod connection;
pub mod contract;
pub mod demux;
pub mod enums;
pub mod error;
pub mod event;
pub mod gateway;
pub mod ids;
pub mod ops;
pub mod order;
pub mod pool;
pub mod registry;
pub mod ticker;
mod utils;
pub mod wait;
pub mod wire;

pub mod http;

/// IBKR client id: identifies one upstream socket session.
pub type ClientId = i32;
/// IBKR order id, seeded from `nextValidId` and raised monotonically.
pub type OrderId = i32;
/// IBKR ticker id: identifies one market-data/historical-data subscription.
pub type TickerId = i64;
pub type AccountCode = String;
pub type TimeStamp = DateTime<Utc>;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        account::*, bars::*, command::*, config::*, connection::*, contract::*, enums::*,
        error::*, event::*, gateway::*, ids::*, order::*, pool::*, registry::*, ticker::*,
        AccountCode, ClientId, OrderId, TickerId, TimeStamp,
    };
}
