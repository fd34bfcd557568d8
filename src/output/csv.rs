use super::{Formatter, SignalReading, iso8601_timestamp};

pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, reading: &SignalReading) -> String {
        let mut fields = vec![iso8601_timestamp()];
        for (_, value) in reading.values() {
            fields.push(value.as_i64().map_or(String::new(), |v| v.to_string()));
        }
        fields.join(",")
    }

    fn header(&self) -> Option<&'static str> {
        Some(
            "ts,gsm_signal_strength,gsm_bit_error_rate,cdma_signal,cdma_ecio,\
             evdo_signal,evdo_ecio,evdo_snr,lte_signal_strength,lte_rsrp,\
             lte_rsrq,lte_snr,lte_cqi,is_gsm,lte_rssi",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::reading;
    use super::*;
    use crate::metric::Metric;

    #[test]
    fn test_header_matches_metric_order() {
        let formatter = CsvFormatter;
        let header = formatter.header().unwrap();
        let columns: Vec<&str> = header.split(',').collect();
        assert_eq!(columns.len(), Metric::ALL.len() + 1);
        assert_eq!(columns[0], "ts");
        for (column, metric) in columns[1..].iter().zip(Metric::ALL) {
            assert_eq!(*column, metric.key());
        }
    }

    #[test]
    fn test_unavailable_fields_are_empty_columns() {
        let formatter = CsvFormatter;
        let line = formatter.format(&reading("x 20 -1 5 0"));
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), Metric::ALL.len() + 1);
        assert_eq!(fields[1], "20");
        assert_eq!(fields[2], "");
        assert_eq!(fields[3], "5");
    }
}
