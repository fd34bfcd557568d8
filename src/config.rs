//! Configuration for the signal monitor.
//!
//! Everything has a sensible default; a TOML file can override any section.
//!
//! ```toml
//! [sanitize]
//! sentinels = ["-1", "99"]
//! max_value = 9999
//!
//! [device]
//! manufacturer = "Acme"
//! model = "Rocket 5"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::constants::{MAX_FIELD_VALUE, NOT_AVAILABLE, SENTINEL_TOKENS, SNAPSHOT_QUEUE_CAPACITY, UNIT_SUFFIX};
use crate::error::{Result, SignalInfoError};
use crate::telephony::DeviceInfo;

/// Top-level monitor configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Snapshot sanitization rules
    pub sanitize: SanitizeConfig,
    /// Screen display settings
    pub display: DisplayConfig,
    /// Listener session settings
    pub session: SessionConfig,
    /// Device/build metadata shown verbatim in the screen header
    pub device: DeviceInfo,
}

impl MonitorConfig {
    /// Load configuration from a TOML file. Missing sections fall back to
    /// their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<MonitorConfig> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            SignalInfoError::Config(format!("cannot read {}: {}", path.as_ref().display(), e))
        })?;
        toml::from_str(&content).map_err(|e| SignalInfoError::Config(e.to_string()))
    }
}

/// Rules for replacing platform sentinel tokens with the "not available"
/// marker during snapshot parsing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SanitizeConfig {
    /// Tokens that mean "metric unknown" (replaced wholesale)
    pub sentinels: Vec<String>,
    /// Values above this are treated as garbage, not measurements
    pub max_value: i64,
}

impl SanitizeConfig {
    /// True if this token is one of the configured sentinel values.
    pub fn is_sentinel(&self, token: &str) -> bool {
        self.sentinels.iter().any(|s| s == token)
    }
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self {
            sentinels: SENTINEL_TOKENS.iter().map(|s| s.to_string()).collect(),
            max_value: MAX_FIELD_VALUE,
        }
    }
}

/// Screen display settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Text shown for metrics the radio did not report
    pub placeholder: String,
    /// Suffix appended to displayed values (except the is-GSM flag)
    pub unit_suffix: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            placeholder: NOT_AVAILABLE.to_string(),
            unit_suffix: UNIT_SUFFIX.to_string(),
        }
    }
}

/// Listener session settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Bounded capacity of the live snapshot channel
    pub queue_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            queue_capacity: SNAPSHOT_QUEUE_CAPACITY,
        }
    }
}
