//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - outputs one result per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_parsed(&mut self, _phrase: &str, outcome: &textmine_core::Result<i64>) -> Result<()> {
        match outcome {
            Ok(value) => writeln!(self.writer, "{value}")?,
            Err(e) => writeln!(self.writer, "error: {e}")?,
        }
        Ok(())
    }

    fn format_token(&mut self, text: &str, position: usize) -> Result<()> {
        writeln!(self.writer, "{position}\t{text}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
