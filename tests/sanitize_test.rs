//! Sanitization properties over the public parsing API.

use signalinfo::config::SanitizeConfig;
use signalinfo::metric::Metric;
use signalinfo::snapshot::{FieldValue, SignalSnapshot};

fn parse(raw: &str) -> SignalSnapshot {
    SignalSnapshot::parse(raw, &SanitizeConfig::default()).unwrap()
}

#[test]
fn test_sentinel_tokens_sanitize_to_unavailable() {
    let snapshot = parse("hdr -1 99 -1 99 -1 99 -1 99 -1 99 -1 99 -1 0");
    for metric in Metric::ALL {
        if metric == Metric::LteRssi {
            continue; // last position, never sentinel-filtered
        }
        assert_eq!(
            snapshot.field(metric),
            Some(FieldValue::NotAvailable),
            "{} should be unavailable",
            metric
        );
    }
}

#[test]
fn test_values_above_ceiling_sanitize_to_unavailable() {
    let snapshot = parse("hdr 10000 123456 20 0");
    assert_eq!(
        snapshot.field(Metric::GsmSignalStrength),
        Some(FieldValue::NotAvailable)
    );
    assert_eq!(
        snapshot.field(Metric::GsmBitErrorRate),
        Some(FieldValue::NotAvailable)
    );
    assert_eq!(snapshot.field(Metric::CdmaSignal), Some(FieldValue::Value(20)));
}

#[test]
fn test_position_zero_is_reserved() {
    // Even a plausible numeric token at position 0 is discarded.
    let snapshot = parse("42 20 0");
    assert_eq!(Metric::from_index(0), None);
    assert_eq!(
        snapshot.field(Metric::GsmSignalStrength),
        Some(FieldValue::Value(20))
    );
}

#[test]
fn test_spec_example_positions() {
    // Second token "-1" unavailable, third "5" and fourth "120" literal.
    let snapshot = parse("99 -1 5 120 30 -1 -1 40 10 5 -1 -1 1 0");
    assert_eq!(
        snapshot.field(Metric::GsmSignalStrength),
        Some(FieldValue::NotAvailable)
    );
    assert_eq!(snapshot.field(Metric::GsmBitErrorRate), Some(FieldValue::Value(5)));
    assert_eq!(snapshot.field(Metric::CdmaSignal), Some(FieldValue::Value(120)));
}

#[test]
fn test_full_snapshot_round_trip() {
    let snapshot = parse("SignalStrength: 20 0 -120 -160 -120 -1 -1 30 10 5 300 12 1 0");
    assert_eq!(
        snapshot.field(Metric::GsmSignalStrength),
        Some(FieldValue::Value(20))
    );
    assert_eq!(snapshot.field(Metric::CdmaSignal), Some(FieldValue::Value(-120)));
    assert_eq!(snapshot.field(Metric::LteSnr), Some(FieldValue::Value(300)));
    assert_eq!(snapshot.field(Metric::LteCqi), Some(FieldValue::Value(12)));
    assert_eq!(snapshot.field(Metric::IsGsm), Some(FieldValue::Value(1)));
    assert_eq!(snapshot.rssi(), FieldValue::Value(-32));
}

#[test]
fn test_rssi_requires_both_inputs() {
    let rsrp_missing = parse("hdr 20 0 -120 -160 -120 -1 -1 30 -1 5 -1 -1 1 0");
    assert_eq!(rsrp_missing.rssi(), FieldValue::NotAvailable);

    let rsrq_missing = parse("hdr 20 0 -120 -160 -120 -1 -1 30 10 99 -1 -1 1 0");
    assert_eq!(rsrq_missing.rssi(), FieldValue::NotAvailable);
}
