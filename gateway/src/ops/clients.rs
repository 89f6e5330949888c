//! `GET /clients` — reports pool occupancy without any upstream round
//! trip, useful for operational visibility into the pool spec.md's §4.1
//! describes. Response shape is spec.md §6's
//! `{connected:{id:bool}, available:[id]}`.
use std::collections::HashMap;

use serde::Serialize;

use crate::gateway::Gateway;
use crate::ClientId;

#[derive(Debug, Serialize)]
pub struct ClientsStatus {
    pub connected: HashMap<ClientId, bool>,
    pub available: Vec<ClientId>,
}

pub fn list_clients(gateway: &Gateway) -> ClientsStatus {
    let connected = gateway.pool.healthcheck().into_iter().collect();
    let available = gateway.pool.available_ids();
    ClientsStatus { connected, available }
}
