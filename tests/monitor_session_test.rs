//! End-to-end: source -> session -> display pass -> screen state.

mod fakes;

use std::io::Cursor;

use fakes::FakeSlot;
use signalinfo::config::{DisplayConfig, SanitizeConfig};
use signalinfo::display::{ScreenWriter, SlotBindings};
use signalinfo::metric::Metric;
use signalinfo::session::MonitorSession;
use signalinfo::telephony::{ChannelSource, ReaderSource};

#[test]
fn test_replay_drives_the_screen() {
    let capture = "\
# two radio updates, second one loses the GSM reading
SignalStrength: 20 0 -120 -160 -120 -1 -1 30 10 5 300 12 1 0
SignalStrength: 99 0 -120 -160 -120 -1 -1 30 11 6 300 12 1 0
";
    let source = ReaderSource::from_reader(Cursor::new(capture));
    let mut session = MonitorSession::new(source, SanitizeConfig::default());

    let mut bindings =
        SlotBindings::new(Metric::ALL.iter().map(|&m| (m, FakeSlot::anonymous())));
    let writer = ScreenWriter::new(&DisplayConfig::default());

    session.start();
    while let Some(snapshot) = session.next().unwrap() {
        writer.write(&snapshot, &mut bindings);
    }
    assert_eq!(session.updates_seen(), 2);
    assert!(!session.is_listening());

    let text_for = |wanted: Metric| {
        bindings
            .iter()
            .find(|(m, _)| *m == wanted)
            .map(|(_, s)| s.text.clone())
            .unwrap()
    };

    // GSM kept the first update's value; RSRP/RSRQ/RSSI follow the second.
    assert_eq!(text_for(Metric::GsmSignalStrength), "20 db");
    assert_eq!(text_for(Metric::LteRsrp), "11 db");
    assert_eq!(text_for(Metric::LteRsrq), "6 db");
    assert_eq!(text_for(Metric::LteRssi), "-34 db");
}

#[test]
fn test_channel_feed_with_malformed_update() {
    let (tx, source) = ChannelSource::channel(10);
    tx.send("SignalStrength: 20 0 -120 -160 -120 -1 -1 30 10 5 300 12 1 0".to_string())
        .unwrap();
    tx.send("   ".to_string()).unwrap(); // platform sent an empty record
    tx.send("SignalStrength: 21 0 -120 -160 -120 -1 -1 30 10 5 300 12 1 0".to_string())
        .unwrap();
    drop(tx);

    let mut session = MonitorSession::new(source, SanitizeConfig::default());
    session.start();

    let mut strengths = Vec::new();
    while let Some(snapshot) = session.next().unwrap() {
        strengths.push(snapshot.field(Metric::GsmSignalStrength).unwrap());
    }

    // The malformed record is dropped, not fatal.
    assert_eq!(session.updates_seen(), 2);
    assert_eq!(
        strengths,
        vec![
            signalinfo::FieldValue::Value(20),
            signalinfo::FieldValue::Value(21)
        ]
    );
}

#[test]
fn test_stopped_session_ignores_pending_updates() {
    let (tx, source) = ChannelSource::channel(10);
    tx.send("SignalStrength: 20 0 -120 -160 -120 -1 -1 30 10 5 300 12 1 0".to_string())
        .unwrap();
    drop(tx);

    let mut session = MonitorSession::new(source, SanitizeConfig::default());
    // Never started: nothing is delivered even though the queue has data.
    assert!(session.next().unwrap().is_none());
    assert_eq!(session.updates_seen(), 0);
}
