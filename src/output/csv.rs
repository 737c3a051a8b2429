use super::{Formatter, SignalRow};

pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, _columns: &[String], row: &SignalRow<'_>) -> String {
        let mut fields = vec![format!("{:.6}", row.time), format!("{:.6}", row.raw)];
        fields.extend(row.filtered.iter().map(|y| format!("{:.6}", y)));
        fields.join(",")
    }

    fn header(&self, columns: &[String]) -> Option<String> {
        let mut names = vec!["time".to_string(), "raw".to_string()];
        names.extend(columns.iter().cloned());
        Some(names.join(","))
    }
}
