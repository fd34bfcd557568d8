use serde_json::{Map, Value, json};

use super::{Formatter, SignalReading, iso8601_timestamp};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, reading: &SignalReading) -> String {
        let mut map = Map::new();
        map.insert("ts".to_string(), json!(iso8601_timestamp()));
        for (metric, value) in reading.values() {
            let v = match value.as_i64() {
                Some(n) => json!(n),
                None => Value::Null,
            };
            map.insert(metric.key().to_string(), v);
        }
        Value::Object(map).to_string()
    }
}
