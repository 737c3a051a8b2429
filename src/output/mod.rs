mod csv;
mod json;
mod text;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

/// One time step of a raw signal and its filtered versions
pub struct SignalRow<'a> {
    pub time: f64,
    pub raw: f64,
    pub filtered: &'a [f64],
}

pub trait Formatter {
    fn format(&self, columns: &[String], row: &SignalRow<'_>) -> String;

    fn header(&self, _columns: &[String]) -> Option<String> {
        None
    }
}

pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
