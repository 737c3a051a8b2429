use super::{Formatter, SignalRow};

/// Space separated columns, `time raw <filters...>`
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format(&self, _columns: &[String], row: &SignalRow<'_>) -> String {
        let mut line = format!("{} {}", row.time, row.raw);
        for y in row.filtered {
            line.push(' ');
            line.push_str(&y.to_string());
        }
        line
    }

    fn header(&self, columns: &[String]) -> Option<String> {
        Some(format!("time raw {}", columns.join(" ")).trim_end().to_string())
    }
}
