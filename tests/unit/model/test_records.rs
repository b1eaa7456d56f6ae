use chrono::{TimeZone, Utc};
use sql_dam::model::records::{FundamentalEntry, Quote, Tick};

#[test]
fn quote_new_keeps_field_order() {
    let q = Quote::new(1_320_796_800, 1.0, 2.0, 0.5, 1.5, "300", "1.45");
    assert_eq!(q.time, 1_320_796_800);
    assert_eq!(q.open, 1.0);
    assert_eq!(q.high, 2.0);
    assert_eq!(q.low, 0.5);
    assert_eq!(q.close, 1.5);
    assert_eq!(q.volume, "300");
    assert_eq!(q.adj_close, "1.45");
}

#[test]
fn quote_date_time_is_utc_epoch_seconds() {
    let q = Quote::new(1_320_796_800, 1.0, 1.0, 1.0, 1.0, "0", "1.0");
    assert_eq!(
        q.date_time(),
        Some(Utc.with_ymd_and_hms(2011, 11, 9, 0, 0, 0).unwrap())
    );
}

#[test]
fn tick_date_time_out_of_range_is_none() {
    let t = Tick::new(i64::MAX, 1.0, 1.0, 1.0, 1.0, "0");
    assert!(t.date_time().is_none());
}

#[test]
fn quote_display_is_json() {
    let q = Quote::new(42, 1.0, 2.0, 0.5, 1.5, "300", "1.45");
    let shown = q.to_string();
    assert!(shown.contains("\"time\":42"));
    assert!(shown.contains("\"adj_close\":\"1.45\""));
}

#[test]
fn tick_serde_roundtrip_preserves_fields() {
    let t = Tick::new(7, 1.0, 2.0, 0.5, 1.5, "12");
    let json = serde_json::to_string(&t).unwrap();
    let back: Tick = serde_json::from_str(&json).unwrap();
    assert_eq!(back, t);
}

#[test]
fn fundamental_entry_new() {
    let e = FundamentalEntry::new("AAPL", "EPS", "2011Q1", 1.5);
    assert_eq!(e.symbol, "AAPL");
    assert_eq!(e.field, "EPS");
    assert_eq!(e.time_stamp, "2011Q1");
    assert_eq!(e.value, 1.5);
}
