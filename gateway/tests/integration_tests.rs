mod common;

use std::collections::HashMap;
use std::thread;
use std::time::Duration;

use ibkr_gateway::enums::{Action, OrderStatus};
use ibkr_gateway::event::Event;
use ibkr_gateway::ops;
use ibkr_gateway::pool::ORDER_CLIENT_ID;
use ibkr_gateway::ticker::TickType;
use rust_decimal_macros::dec;

use common::TestHarness;

/// Scenario: `placeOrder` succeeds once an `orderStatus` callback arrives
/// on the reserved order client.
#[test]
fn place_order_returns_status_once_upstream_acknowledges() {
    let harness = TestHarness::new(2);
    let mut fields = HashMap::new();
    fields.insert("symbol".to_string(), "AAPL".to_string());

    let result = thread::scope(|scope| {
        let handle = scope.spawn(|| ops::place_order::place_order(&harness.gateway, Action::Buy, dec!(100), &fields));

        thread::sleep(Duration::from_millis(50));
        harness.deliver(
            ORDER_CLIENT_ID,
            Event::OrderStatus(ibkr_gateway::order::OrderStatusUpdate {
                order_id: 0,
                status: OrderStatus::Submitted,
                filled: dec!(0),
                remaining: dec!(100),
                avg_fill_price: dec!(0),
                perm_id: 1,
                parent_id: 0,
                last_fill_price: dec!(0),
                client_id: ORDER_CLIENT_ID,
                why_held: String::new(),
            }),
        );

        handle.join().unwrap()
    });

    let placed = result.unwrap();
    assert_eq!(placed.order_id, 0);
    assert_eq!(placed.status.unwrap().status, OrderStatus::Submitted);

    let sent = harness.transports[ORDER_CLIENT_ID as usize].sent.lock().unwrap();
    assert!(matches!(sent[0], ibkr_gateway::command::Command::PlaceOrder { .. }));
}

/// Scenario: `cancelOrder`'s error slot is keyed by the explicit orderId
/// argument (spec.md §9), not a stale global.
#[test]
fn cancel_order_surfaces_error_keyed_by_explicit_order_id() {
    let harness = TestHarness::new(2);

    let result = thread::scope(|scope| {
        let handle = scope.spawn(|| ops::cancel_order::cancel_order(&harness.gateway, 42));

        thread::sleep(Duration::from_millis(50));
        harness.deliver(
            ORDER_CLIENT_ID,
            Event::Error { req_id: 42, code: 135, message: "Cannot cancel the filled order".to_string() },
        );

        handle.join().unwrap()
    });

    let err = result.unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert!(err.to_string().contains("Cannot cancel the filled order"));
}

/// Scenario: `getMarket` returns once the minimum-tick completion
/// predicate is satisfied (`original_source/feeds.py`'s `len(...) < 5`).
#[test]
fn get_market_waits_for_minimum_tick_count() {
    let harness = TestHarness::new(1);

    let ticks = thread::scope(|scope| {
        let handle = scope.spawn(|| ops::get_market::get_market(&harness.gateway, "AAPL"));

        thread::sleep(Duration::from_millis(50));
        let ticker_id = {
            let sent = harness.transports[0].sent.lock().unwrap();
            match &sent[0] {
                ibkr_gateway::command::Command::ReqMktData { ticker_id, .. } => *ticker_id,
                other => panic!("unexpected first command {other:?}"),
            }
        };
        for _ in 0..5 {
            harness.deliver(0, Event::TickPrice { ticker_id, field: TickType::Last, price: 150.0 });
        }

        handle.join().unwrap()
    });

    assert_eq!(ticks.unwrap().len(), 5);
}

/// Scenario: when the connection drops mid-wait, the operation reports
/// `NotConnected` (the `-1` sentinel's textual pairing, spec.md §3).
#[test]
fn disconnect_mid_wait_reports_not_connected() {
    let harness = TestHarness::new(1);
    harness.transports[0].connected.store(false, std::sync::atomic::Ordering::SeqCst);

    let result = ops::get_positions::get_positions(&harness.gateway);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Couldn't connect to TWS"));
}

/// Scenario: the pool reports exhaustion (`-2`) once every general-purpose
/// connection is checked out.
#[test]
fn pool_exhaustion_returns_429() {
    let harness = TestHarness::new(1);
    let _held = harness.gateway.pool.acquire().unwrap();
    let err = harness.gateway.pool.acquire().unwrap_err();
    assert_eq!(err.status_code(), 429);
    assert!(err.to_string().contains("Client ID not available in time"));
}

/// Scenario: `getAccountUpdate` tears down with `ReqAccountUpdates{subscribe:
/// false}` (i.e. `cancelAccountUpdates`), not `cancelAccountSummary`
/// (spec.md §9's resolved Open Question).
#[test]
fn get_account_update_tears_down_with_cancel_account_updates() {
    let harness = TestHarness::new(1);

    let result = thread::scope(|scope| {
        let handle = scope.spawn(|| ops::get_account_update::get_account_update(&harness.gateway, "DU123"));

        thread::sleep(Duration::from_millis(50));
        harness.deliver(0, Event::AccountDownloadEnd { account: "DU123".to_string() });

        handle.join().unwrap()
    });

    result.unwrap();
    let sent = harness.transports[0].sent.lock().unwrap();
    let last = sent.last().unwrap();
    match last {
        ibkr_gateway::command::Command::ReqAccountUpdates { subscribe, account } => {
            assert!(!subscribe);
            assert_eq!(account, "DU123");
        }
        other => panic!("expected teardown ReqAccountUpdates{{subscribe:false}}, got {other:?}"),
    }
}
