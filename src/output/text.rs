use super::{Formatter, SignalReading};

pub struct TextFormatter {
    verbose: bool,
}

impl TextFormatter {
    pub fn new(verbose: bool) -> TextFormatter {
        TextFormatter { verbose }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, reading: &SignalReading) -> String {
        let mut parts = Vec::new();
        for (metric, value) in reading.values() {
            if self.verbose || value.is_available() {
                parts.push(format!("{}={}", metric.key(), value));
            }
        }
        if parts.is_empty() {
            return "signal: (no data)".to_string();
        }
        format!("signal: {}", parts.join(" "))
    }
}
