// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive prompt loop.
//!
//! Reads one word per line and reports matches until `exit` or end of input.

use std::io::{self, BufRead};

use termcolor::WriteColor;

use crate::pattern::{Patterns, evaluate};
use crate::report::ReportFormatter;

/// Input that ends the prompt loop.
pub const EXIT_WORD: &str = "exit";

const PROMPT: &str = "Enter a word to check against the regex patterns. Type 'exit' to exit";

/// A checking session over patterns loaded once at startup.
pub struct Session<'a> {
    patterns: &'a Patterns,
    formatter: &'a dyn ReportFormatter,
    prompt: bool,
}

impl<'a> Session<'a> {
    pub fn new(patterns: &'a Patterns, formatter: &'a dyn ReportFormatter) -> Self {
        Self { patterns, formatter, prompt: true }
    }

    /// Enable or disable the prompt text printed before each read.
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// Evaluate one word and write its report.
    pub fn check(&self, word: &str, out: &mut dyn WriteColor) -> io::Result<()> {
        let result = evaluate(word, self.patterns);
        tracing::debug!(
            "checked {:?}: {} dirty, {} clean",
            word,
            result.dirty.len(),
            result.clean.len()
        );
        self.formatter.format_to(out, word, &result)
    }

    /// Check each word in turn without prompting.
    pub fn check_all<S: AsRef<str>>(&self, words: &[S], out: &mut dyn WriteColor) -> io::Result<()> {
        for word in words {
            self.check(word.as_ref(), out)?;
        }
        out.flush()
    }

    /// Run the prompt loop. Returns the number of words checked.
    pub fn run<R: BufRead>(&self, mut input: R, out: &mut dyn WriteColor) -> io::Result<usize> {
        let mut checked = 0;
        let mut line = String::new();

        loop {
            if self.prompt {
                writeln!(out, "{}", PROMPT)?;
                write!(out, "input: ")?;
            }
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                if self.prompt {
                    writeln!(out)?;
                }
                break;
            }

            let word = line.strip_suffix('\n').unwrap_or(&line);
            let word = word.strip_suffix('\r').unwrap_or(word);
            if word == EXIT_WORD {
                break;
            }

            self.check(word, out)?;
            checked += 1;
        }

        out.flush()?;
        Ok(checked)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
