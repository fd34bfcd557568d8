mod csv;
mod json;
mod text;

use chrono::Utc;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;

use crate::metric::Metric;
use crate::snapshot::{FieldValue, SignalSnapshot};

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// One snapshot flattened for streaming output: every metric in display
/// order, with the derived RSSI already computed.
pub struct SignalReading {
    values: Vec<(Metric, FieldValue)>,
}

impl SignalReading {
    pub fn from_snapshot(snapshot: &SignalSnapshot) -> SignalReading {
        let values = Metric::ALL
            .iter()
            .map(|&metric| {
                let value = if metric.is_derived() {
                    snapshot.rssi()
                } else {
                    snapshot.field(metric).unwrap_or(FieldValue::NotAvailable)
                };
                (metric, value)
            })
            .collect();
        SignalReading { values }
    }

    pub fn values(&self) -> impl Iterator<Item = (Metric, FieldValue)> {
        self.values.iter().copied()
    }
}

pub trait Formatter: Send {
    fn format(&self, reading: &SignalReading) -> String;

    fn header(&self) -> Option<&'static str> {
        None
    }
}

pub fn create_formatter(format: OutputFormat, verbose: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(verbose)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

pub fn iso8601_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SanitizeConfig;

    pub(crate) fn reading(raw: &str) -> SignalReading {
        let snapshot = SignalSnapshot::parse(raw, &SanitizeConfig::default()).unwrap();
        SignalReading::from_snapshot(&snapshot)
    }

    #[test]
    fn test_reading_covers_every_metric() {
        let reading = reading("x 20 0");
        assert_eq!(reading.values().count(), Metric::ALL.len());
        // out of range on the short snapshot
        let (_, rsrp) = reading
            .values()
            .find(|(m, _)| *m == Metric::LteRsrp)
            .unwrap();
        assert_eq!(rsrp, FieldValue::NotAvailable);
    }

    #[test]
    fn test_reading_carries_derived_rssi() {
        let reading = reading("x 20 0 -120 -160 -120 -1 -1 30 10 5 -1 -1 1 0");
        let (_, rssi) = reading
            .values()
            .find(|(m, _)| *m == Metric::LteRssi)
            .unwrap();
        assert_eq!(rssi, FieldValue::Value(-32));
    }
}
