// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern model and two-tier matching.
//!
//! Patterns come in two categories:
//! - Dirty: a match flags the word.
//! - Clean: only evaluated once a dirty pattern matched, to qualify the flag.

pub mod matcher;
pub mod set;

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

pub use matcher::{MatchResult, Trigger, evaluate};
pub use set::{LoadStats, PatternSet, Patterns, SourceIndex, SourceKey};

/// Which list a pattern was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Dirty,
    Clean,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Dirty => "dirty",
            Category::Clean => "clean",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compiled form of a pattern.
///
/// Plain patterns use [`regex`]; look-around and backreferences need
/// [`fancy_regex`], which backtracks and so is only used when required.
#[derive(Debug, Clone)]
enum Compiled {
    Basic(regex::Regex),
    Fancy(fancy_regex::Regex),
}

impl Compiled {
    fn new(text: &str) -> std::result::Result<Self, fancy_regex::Error> {
        match regex::Regex::new(text) {
            Ok(regex) => Ok(Compiled::Basic(regex)),
            Err(_) => fancy_regex::Regex::new(text).map(Compiled::Fancy),
        }
    }
}

/// A compiled pattern. Identity is the (possibly anchored) source text.
#[derive(Debug, Clone)]
pub struct Pattern {
    text: String,
    compiled: Compiled,
}

impl Pattern {
    /// Compile a pattern line, wrapping it in `\b` anchors when `anchor` is set.
    ///
    /// `file` is only used to label the error.
    pub fn compile(line: &str, anchor: bool, file: &str) -> Result<Self> {
        let text = if anchor { format!(r"\b{}\b", line) } else { line.to_string() };
        match Compiled::new(&text) {
            Ok(compiled) => Ok(Self { text, compiled }),
            Err(source) => Err(Error::InvalidPatternSyntax {
                pattern: text,
                file: file.to_string(),
                source: Box::new(source),
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True if the pattern uses look-around or backreferences.
    pub fn is_fancy(&self) -> bool {
        matches!(self.compiled, Compiled::Fancy(_))
    }

    /// True if the pattern matches anywhere within `word`.
    ///
    /// A backtracking pattern that exceeds its backtrack limit counts as no match.
    pub fn is_match(&self, word: &str) -> bool {
        match &self.compiled {
            Compiled::Basic(regex) => regex.is_match(word),
            Compiled::Fancy(regex) => regex.is_match(word).unwrap_or_else(|e| {
                tracing::warn!("pattern {} gave up on {:?}: {}", self.text, word, e);
                false
            }),
        }
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
