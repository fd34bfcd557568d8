//! Closed enumeration of the signal metrics carried by a snapshot.
//!
//! The telephony service serializes its signal-strength record as a
//! space-separated token list with a fixed positional schema. Each variant
//! here names one of those positions; position 0 is reserved and never
//! displayed. `LteRssi` occupies the final position but its displayed value
//! is derived from RSRP/RSRQ rather than read from the snapshot (the radio
//! does not report a direct LTE RSSI).

use std::fmt;

/// A signal metric and its fixed position in the snapshot token list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    GsmSignalStrength,
    GsmBitErrorRate,
    CdmaSignal,
    CdmaEcio,
    EvdoSignal,
    EvdoEcio,
    EvdoSnr,
    LteSignalStrength,
    LteRsrp,
    LteRsrq,
    LteSnr,
    LteCqi,
    IsGsm,
    LteRssi,
}

impl Metric {
    /// Highest snapshot position named by any metric. A full snapshot carries
    /// `MAX_INDEX + 1` tokens; shorter ones degrade per-field.
    pub const MAX_INDEX: usize = 14;

    /// All metrics in display (and snapshot) order.
    pub const ALL: [Metric; 14] = [
        Metric::GsmSignalStrength,
        Metric::GsmBitErrorRate,
        Metric::CdmaSignal,
        Metric::CdmaEcio,
        Metric::EvdoSignal,
        Metric::EvdoEcio,
        Metric::EvdoSnr,
        Metric::LteSignalStrength,
        Metric::LteRsrp,
        Metric::LteRsrq,
        Metric::LteSnr,
        Metric::LteCqi,
        Metric::IsGsm,
        Metric::LteRssi,
    ];

    /// Position of this metric in the snapshot token list.
    pub fn index(&self) -> usize {
        match self {
            Metric::GsmSignalStrength => 1,
            Metric::GsmBitErrorRate => 2,
            Metric::CdmaSignal => 3,
            Metric::CdmaEcio => 4,
            Metric::EvdoSignal => 5,
            Metric::EvdoEcio => 6,
            Metric::EvdoSnr => 7,
            Metric::LteSignalStrength => 8,
            Metric::LteRsrp => 9,
            Metric::LteRsrq => 10,
            Metric::LteSnr => 11,
            Metric::LteCqi => 12,
            Metric::IsGsm => 13,
            Metric::LteRssi => 14,
        }
    }

    /// Look up the metric occupying a snapshot position.
    /// Position 0 is reserved and maps to nothing.
    pub fn from_index(index: usize) -> Option<Metric> {
        Metric::ALL.iter().copied().find(|m| m.index() == index)
    }

    /// Human-readable label for screen display.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::GsmSignalStrength => "GSM signal strength",
            Metric::GsmBitErrorRate => "GSM bit error rate",
            Metric::CdmaSignal => "CDMA signal",
            Metric::CdmaEcio => "CDMA Ec/Io",
            Metric::EvdoSignal => "EVDO signal",
            Metric::EvdoEcio => "EVDO Ec/Io",
            Metric::EvdoSnr => "EVDO SNR",
            Metric::LteSignalStrength => "LTE signal strength",
            Metric::LteRsrp => "LTE RSRP",
            Metric::LteRsrq => "LTE RSRQ",
            Metric::LteSnr => "LTE SNR",
            Metric::LteCqi => "LTE CQI",
            Metric::IsGsm => "GSM mode",
            Metric::LteRssi => "LTE RSSI",
        }
    }

    /// Stable machine-readable key (JSON/CSV column name).
    pub fn key(&self) -> &'static str {
        match self {
            Metric::GsmSignalStrength => "gsm_signal_strength",
            Metric::GsmBitErrorRate => "gsm_bit_error_rate",
            Metric::CdmaSignal => "cdma_signal",
            Metric::CdmaEcio => "cdma_ecio",
            Metric::EvdoSignal => "evdo_signal",
            Metric::EvdoEcio => "evdo_ecio",
            Metric::EvdoSnr => "evdo_snr",
            Metric::LteSignalStrength => "lte_signal_strength",
            Metric::LteRsrp => "lte_rsrp",
            Metric::LteRsrq => "lte_rsrq",
            Metric::LteSnr => "lte_snr",
            Metric::LteCqi => "lte_cqi",
            Metric::IsGsm => "is_gsm",
            Metric::LteRssi => "lte_rssi",
        }
    }

    /// Unit suffix for display. The is-GSM flag is a boolean, not a level.
    pub fn unit(&self) -> Option<&'static str> {
        match self {
            Metric::IsGsm => None,
            _ => Some("db"),
        }
    }

    /// True if the displayed value is computed rather than read positionally.
    pub fn is_derived(&self) -> bool {
        matches!(self, Metric::LteRssi)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
