// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::io;

use termcolor::{ColorSpec, WriteColor};

use crate::color::scheme;
use crate::pattern::{MatchResult, Trigger};

use super::{FILES_WIDTH, PATTERN_WIDTH, ReportFormatter};

/// Text format report formatter: a headline and a two-column table per category.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format_to(
        &self,
        writer: &mut dyn WriteColor,
        word: &str,
        result: &MatchResult<'_>,
    ) -> io::Result<()> {
        if !result.is_triggered() {
            writeln!(writer, "The word '{}' does not trigger any of the regex patterns.", word)?;
            return writeln!(writer);
        }

        let headline = format!("The word '{}' triggers {} dirty patterns", word, result.dirty.len());
        write_section(writer, &headline, &scheme::dirty(), &result.dirty)?;

        if !result.clean.is_empty() {
            let headline =
                format!("The word '{}' matches {} clean patterns", word, result.clean.len());
            write_section(writer, &headline, &scheme::clean(), &result.clean)?;
        }

        writeln!(writer)
    }
}

fn write_section(
    writer: &mut dyn WriteColor,
    headline: &str,
    headline_spec: &ColorSpec,
    triggers: &[Trigger<'_>],
) -> io::Result<()> {
    writer.set_color(headline_spec)?;
    write!(writer, "{}", headline)?;
    writer.reset()?;
    writeln!(writer)?;

    writer.set_color(&scheme::header())?;
    write!(writer, "{:<pw$}{:<fw$}", "Pattern", "Files Found", pw = PATTERN_WIDTH, fw = FILES_WIDTH)?;
    writer.reset()?;
    writeln!(writer)?;

    for trigger in triggers {
        let files = trigger.file.unwrap_or_default();
        writer.set_color(&scheme::pattern())?;
        write!(writer, "{:<pw$}", trigger.pattern, pw = PATTERN_WIDTH)?;
        writer.set_color(&scheme::file())?;
        write!(writer, "{:<fw$}", files, fw = FILES_WIDTH)?;
        writer.reset()?;
        writeln!(writer)?;
    }
    Ok(())
}
