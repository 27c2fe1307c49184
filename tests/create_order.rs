use chrono::{Duration, TimeZone, Utc};
use shift_order::{CreateOrder, ShiftOrder, ShiftType};

fn changenow_order() -> ShiftOrder {
    let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    ShiftOrder::builder()
        .tag("changenow")
        .btc_currency("BTC")
        .btc_amount(0.01)
        .btc_address("1Abc...")
        .quote_id("q1")
        .order_id("o1")
        .xmr_amount(1.23)
        .xmr_address("4Abc...")
        .created_at(t0)
        .expires_at(t0 + Duration::seconds(900))
        .query_order_id("o1")
        .shift_type(ShiftType::ChangeNow)
        .build()
        .unwrap()
}

fn assert_scenario(order: &dyn CreateOrder) {
    let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    assert_eq!(order.tag(), "changenow");
    assert_eq!(order.btc_currency(), "BTC");
    assert_eq!(order.btc_amount(), 0.01);
    assert_eq!(order.btc_address(), "1Abc...");
    assert_eq!(order.quote_id(), "q1");
    assert_eq!(order.order_id(), "o1");
    assert_eq!(order.xmr_amount(), 1.23);
    assert_eq!(order.xmr_address(), "4Abc...");
    assert_eq!(order.created_at(), t0);
    assert_eq!(order.expires_at(), t0 + Duration::seconds(900));
    assert_eq!(order.query_order_id(), "o1");
    assert_eq!(order.shift_type(), ShiftType::ChangeNow);
}

#[test]
fn accessors_return_constructed_values() {
    let order = changenow_order();
    assert_scenario(&order);
    // Same answers on a second read.
    assert_scenario(&order);
}

#[test]
fn json_round_trip_keeps_every_field() {
    let order = changenow_order();
    let encoded = serde_json::to_string(&order).unwrap();
    let decoded: ShiftOrder = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded, order);
    assert_scenario(&decoded);
    assert_eq!(serde_json::to_string(&decoded).unwrap(), encoded);
}

#[test]
fn orders_are_shareable_across_threads() {
    let order = std::sync::Arc::new(changenow_order());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let order = order.clone();
            std::thread::spawn(move || order.order_id().to_string())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "o1");
    }
}
