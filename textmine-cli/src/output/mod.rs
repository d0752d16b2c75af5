//! Output formatting module

use anyhow::Result;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Report the outcome of parsing one phrase
    fn format_parsed(&mut self, phrase: &str, outcome: &textmine_core::Result<i64>) -> Result<()>;

    /// Report one token and the position it occurs at
    fn format_token(&mut self, text: &str, position: usize) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one result per line
    Text,
    /// JSON array of results
    Json,
}

impl OutputFormat {
    /// Parse a format name from a configuration file
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// A formatter writing to stdout
    pub fn stdout_formatter(self, pretty_json: bool) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter::stdout()),
            Self::Json => Box::new(JsonFormatter::new(std::io::stdout(), pretty_json)),
        }
    }
}
