//! Platform constants for snapshot sanitization and display
//!
//! These constants mirror the telephony subsystem's conventions: the sentinel
//! tokens it emits for unknown metrics and the marker shown in their place.

/// Text shown for a metric the radio did not report.
pub const NOT_AVAILABLE: &str = "N/A";

/// Sentinel tokens the telephony service emits for "metric unknown".
/// `-1` is the generic unknown marker; `99` is the GSM/UMTS ASU unknown value.
pub const SENTINEL_TOKENS: &[&str] = &["-1", "99"];

/// Ceiling above which a reported value is treated as garbage rather than a
/// measurement. Some radios report raw register contents in these positions.
pub const MAX_FIELD_VALUE: i64 = 9999;

/// Unit suffix appended to displayed metric values (the is-GSM flag excepted).
pub const UNIT_SUFFIX: &str = " db";

/// Bounded capacity for the live snapshot channel. Updates are infrequent;
/// anything past this is dropped by the sender.
pub const SNAPSHOT_QUEUE_CAPACITY: usize = 10;
