// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use std::io;

use serde_json::json;
use termcolor::WriteColor;

use crate::pattern::MatchResult;

use super::ReportFormatter;

/// JSON format report formatter. Writes one object per line.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format_to(
        &self,
        writer: &mut dyn WriteColor,
        word: &str,
        result: &MatchResult<'_>,
    ) -> io::Result<()> {
        let report = json!({
            "word": word,
            "triggered": result.is_triggered(),
            "dirty": result.dirty,
            "clean": result.clean,
        });
        serde_json::to_writer(&mut *writer, &report)?;
        writeln!(writer)
    }
}
