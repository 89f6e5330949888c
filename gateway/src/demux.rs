//! The event demultiplexer: one `match` arm per `Event` variant, routing
//! into the registry's per-kind mailboxes. Grounded in
//! `original_source/handlers.py` (one function per event kind mutating a
//! global) recast as a single dispatch function, in the `match`-over-enum
//! style `api/src/ib_frame.rs::IBFrame::parse` uses.
use crate::error::GatewayError;
use crate::event::Event;
use crate::ids::IdentifierState;
use crate::registry::{ErrorSlot, Registry};
use crate::ClientId;

/// Applies one decoded upstream `Event`, originating from connection
/// `client_id`, to the shared registry.
pub fn dispatch(registry: &Registry, ids: &IdentifierState, client_id: ClientId, event: Event) {
    match event {
        Event::NextValidId { order_id } => {
            ids.observe_next_valid_id(order_id);
        }
        Event::ManagedAccounts { .. } => {
            // no mailbox keys on managed account list directly; accounts
            // are consumed by account-scoped operations via client_id.
        }
        Event::Error { req_id, code, message } => {
            registry.errors.lock().insert(req_id, ErrorSlot { code, message });
        }

        Event::TickPrice { ticker_id, field, price } => {
            registry
                .market
                .lock()
                .entry(ticker_id)
                .or_default()
                .ticks
                .push(crate::ticker::Tick::Price { field, price });
        }
        Event::TickSize { ticker_id, field, size } => {
            registry
                .market
                .lock()
                .entry(ticker_id)
                .or_default()
                .ticks
                .push(crate::ticker::Tick::Size { field, size });
        }

        Event::HistoricalDataBar { req_id, bar } => {
            registry.history.lock().entry(req_id).or_default().bars.push(bar);
        }
        Event::HistoricalDataEnd { req_id } => {
            registry.history.lock().entry(req_id).or_default().complete = true;
        }

        Event::OpenOrder { order_id, contract, order } => {
            let open_order = crate::order::OpenOrder { order_id, contract, order };
            registry.order.lock().entry(order_id).or_default().open_order = Some(open_order.clone());
            registry.order_list.lock().entry(client_id).or_default().open_orders.push(open_order);
        }
        Event::OrderStatus(update) => {
            registry.order.lock().entry(update.order_id).or_default().statuses.push(update.clone());
            registry.order_list.lock().entry(client_id).or_default().statuses.push(update);
        }
        Event::OpenOrderEnd => {
            registry.order_list.lock().entry(client_id).or_default().complete = true;
        }

        Event::Position(position) => {
            registry.positions.lock().entry(client_id).or_default().positions.push(position);
        }
        Event::PositionEnd => {
            registry.positions.lock().entry(client_id).or_default().complete = true;
        }

        Event::AccountSummary { req_id, tag, value, currency, .. } => {
            registry
                .account_summary
                .lock()
                .entry(req_id)
                .or_default()
                .values
                .insert(tag, (value, currency));
        }
        Event::AccountSummaryEnd { req_id } => {
            registry.account_summary.lock().entry(req_id).or_default().complete = true;
        }

        Event::UpdateAccountValue { key, value, .. } => {
            registry
                .account_update
                .lock()
                .entry(client_id)
                .or_default()
                .snapshot
                .values
                .insert(key, value);
        }
        Event::UpdatePortfolio(position) => {
            registry
                .account_update
                .lock()
                .entry(client_id)
                .or_default()
                .snapshot
                .portfolio
                .push(position);
        }
        Event::UpdateAccountTime { timestamp } => {
            registry.account_update.lock().entry(client_id).or_default().snapshot.account_time = Some(timestamp);
        }
        Event::AccountDownloadEnd { .. } => {
            registry.account_update.lock().entry(client_id).or_default().download_end_seen = true;
        }
    }
}

/// Runs `dispatch` forever against the shared event bus, until the sending
/// half of every `Connection` is dropped. One instance of this loop runs
/// per process (spec.md §2's demultiplexer component).
pub fn run(
    registry: std::sync::Arc<Registry>,
    ids: std::sync::Arc<IdentifierState>,
    bus: crossbeam_channel::Receiver<(ClientId, crate::event::Event)>,
) -> Result<(), GatewayError> {
    for (client_id, event) in bus {
        dispatch(&registry, &ids, client_id, event);
    }
    Ok(())
}
