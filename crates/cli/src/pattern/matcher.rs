// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Two-tier match evaluation.
//!
//! Dirty patterns are scanned first. The clean set is only scanned when at
//! least one dirty pattern triggered; otherwise the clean result is empty.

use serde::Serialize;

use super::{Category, PatternSet, Patterns, SourceIndex};

/// A pattern that matched, with the file it was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trigger<'a> {
    pub pattern: &'a str,
    #[serde(skip)]
    pub category: Category,
    pub file: Option<&'a str>,
}

/// Triggered patterns for one word, in set iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchResult<'a> {
    pub dirty: Vec<Trigger<'a>>,
    pub clean: Vec<Trigger<'a>>,
}

impl MatchResult<'_> {
    /// True if any dirty pattern triggered.
    pub fn is_triggered(&self) -> bool {
        !self.dirty.is_empty()
    }
}

/// Evaluate `word` against the loaded patterns.
pub fn evaluate<'a>(word: &str, patterns: &'a Patterns) -> MatchResult<'a> {
    let dirty = scan(word, &patterns.dirty, Category::Dirty, &patterns.sources);
    if dirty.is_empty() {
        return MatchResult::default();
    }
    let clean = scan(word, &patterns.clean, Category::Clean, &patterns.sources);
    MatchResult { dirty, clean }
}

fn scan<'a>(
    word: &str,
    set: &'a PatternSet,
    category: Category,
    sources: &'a SourceIndex,
) -> Vec<Trigger<'a>> {
    set.iter()
        .filter(|pattern| pattern.is_match(word))
        .map(|pattern| Trigger {
            pattern: pattern.as_str(),
            category,
            file: sources.file_for(pattern.as_str(), category),
        })
        .collect()
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
