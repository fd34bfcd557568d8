//! Snapshot parsing and sanitization.
//!
//! The telephony service hands over each signal update as a single string of
//! space-separated tokens (its own serialization of the signal-strength
//! record; the format is positional and not controlled by us). Parsing splits
//! the string, then sanitizes every position that carries a raw measurement:
//!
//! - position 0 is reserved and always rendered "not available",
//! - positions 1 through len-2 have sentinel tokens (`-1`, `99`) and
//!   implausibly large values (> 9999) replaced with "not available",
//! - the last position is parsed but never sentinel-filtered; its display
//!   semantics are handled by the derived RSSI (see [`SignalSnapshot::rssi`]).
//!
//! A non-numeric token at a sanitization-eligible position is treated as
//! "not available" with a debug note. Some radios stringify the trailing
//! mode flag as text rather than 0/1, which lands in that path.

use std::fmt;

use crate::config::SanitizeConfig;
use crate::constants::NOT_AVAILABLE;
use crate::error::{Result, SignalInfoError};
use crate::metric::Metric;

/// One sanitized snapshot field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    /// A real measurement (or flag) the radio reported
    Value(i64),
    /// Sentinel, garbage, or missing
    NotAvailable,
}

impl FieldValue {
    pub fn is_available(&self) -> bool {
        matches!(self, FieldValue::Value(_))
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Value(v) => Some(*v),
            FieldValue::NotAvailable => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Value(v) => write!(f, "{}", v),
            FieldValue::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

/// A parsed, sanitized signal-strength snapshot.
///
/// Fields are positional; use [`Metric`] to address them. Snapshots shorter
/// than `Metric::MAX_INDEX + 1` tokens are accepted — lookups past the end
/// return `None` and callers degrade per-field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalSnapshot {
    fields: Vec<FieldValue>,
}

impl SignalSnapshot {
    /// Parse and sanitize a raw snapshot string.
    pub fn parse(raw: &str, rules: &SanitizeConfig) -> Result<SignalSnapshot> {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        if tokens.is_empty() {
            return Err(SignalInfoError::Snapshot("empty snapshot".to_string()));
        }

        let last = tokens.len() - 1;
        let fields = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                if i == 0 {
                    // Reserved position; its content is never displayed.
                    FieldValue::NotAvailable
                } else if i == last {
                    parse_lenient(token)
                } else {
                    sanitize(token, rules)
                }
            })
            .collect();

        Ok(SignalSnapshot { fields })
    }

    /// Positional lookup. `None` for an index beyond the parsed token count.
    pub fn field(&self, metric: Metric) -> Option<FieldValue> {
        self.fields.get(metric.index()).copied()
    }

    /// Positional lookup that reports a short snapshot as an error.
    pub fn field_checked(&self, metric: Metric) -> Result<FieldValue> {
        self.field(metric)
            .ok_or(SignalInfoError::ShortSnapshot {
                needed: metric.index() + 1,
                available: self.fields.len(),
            })
    }

    /// Derived LTE RSSI: `-17 - RSRP - RSRQ`.
    ///
    /// The radio reports no direct LTE RSSI; this is the standard
    /// approximation from the reported RSRP/RSRQ magnitudes. Not available
    /// when either input is.
    pub fn rssi(&self) -> FieldValue {
        let rsrp = self.field(Metric::LteRsrp).and_then(|v| v.as_i64());
        let rsrq = self.field(Metric::LteRsrq).and_then(|v| v.as_i64());
        match (rsrp, rsrq) {
            (Some(p), Some(q)) => FieldValue::Value(-17 - p - q),
            _ => FieldValue::NotAvailable,
        }
    }

    /// Number of parsed fields (including the reserved position 0).
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn sanitize(token: &str, rules: &SanitizeConfig) -> FieldValue {
    if rules.is_sentinel(token) {
        return FieldValue::NotAvailable;
    }
    match token.parse::<i64>() {
        Ok(v) if v > rules.max_value => FieldValue::NotAvailable,
        Ok(v) => FieldValue::Value(v),
        Err(_) => {
            log::debug!("non-numeric snapshot token {:?}, treating as unavailable", token);
            FieldValue::NotAvailable
        }
    }
}

fn parse_lenient(token: &str) -> FieldValue {
    match token.parse::<i64>() {
        Ok(v) => FieldValue::Value(v),
        Err(_) => {
            log::debug!("non-numeric trailing token {:?}, treating as unavailable", token);
            FieldValue::NotAvailable
        }
    }
}
