use serde_json::{Map, Value, json};

use super::{Formatter, SignalRow};

/// One JSON object per line, filtered columns keyed by name
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, columns: &[String], row: &SignalRow<'_>) -> String {
        let mut object = Map::new();
        object.insert("time".to_string(), json!(row.time));
        object.insert("raw".to_string(), json!(row.raw));
        for (name, y) in columns.iter().zip(row.filtered) {
            object.insert(name.clone(), json!(y));
        }
        Value::Object(object).to_string()
    }
}
