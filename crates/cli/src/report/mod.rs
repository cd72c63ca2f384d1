// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match report output.
//!
//! Renders the result of checking one word in text or JSON format.

mod json;
mod text;

use std::io;

use termcolor::{Buffer, WriteColor};

use crate::cli::OutputFormat;
use crate::pattern::MatchResult;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Width of the pattern column in text output.
pub const PATTERN_WIDTH: usize = 50;
/// Width of the files column in text output.
pub const FILES_WIDTH: usize = 30;

/// Trait for match report formatters.
pub trait ReportFormatter {
    /// Write the report for one word.
    fn format_to(
        &self,
        writer: &mut dyn WriteColor,
        word: &str,
        result: &MatchResult<'_>,
    ) -> io::Result<()>;

    /// Render the report for one word into an uncolored string.
    fn format(&self, word: &str, result: &MatchResult<'_>) -> io::Result<String> {
        let mut buffer = Buffer::no_color();
        self.format_to(&mut buffer, word, result)?;
        Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
    }
}

/// Select the formatter for an output format.
pub fn formatter_for(format: OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
