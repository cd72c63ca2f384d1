// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Deduplicated pattern sets and the pattern-to-file source index.

use std::collections::{HashMap, HashSet};

use super::{Category, Pattern};

/// Insertion-ordered set of patterns, deduplicated by pattern text.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
    seen: HashSet<String>,
}

impl PatternSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pattern. Returns false if an identical pattern was already present.
    pub fn insert(&mut self, pattern: Pattern) -> bool {
        if !self.seen.insert(pattern.as_str().to_string()) {
            return false;
        }
        self.patterns.push(pattern);
        true
    }

    pub fn contains(&self, text: &str) -> bool {
        self.seen.contains(text)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Key into the source index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceKey {
    pub pattern: String,
    pub category: Category,
}

/// Maps (pattern, category) to the file that contributed it.
///
/// Recording the same key twice keeps the later filename.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceIndex {
    files: HashMap<SourceKey, String>,
}

impl SourceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, pattern: &str, category: Category, file: &str) {
        let key = SourceKey { pattern: pattern.to_string(), category };
        self.files.insert(key, file.to_string());
    }

    pub fn file_for(&self, pattern: &str, category: Category) -> Option<&str> {
        let key = SourceKey { pattern: pattern.to_string(), category };
        self.files.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Counters gathered while loading one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// `.txt` files read.
    pub files: usize,
    /// Non-blank lines accepted, duplicates included.
    pub lines: usize,
}

/// Everything loaded at startup. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Patterns {
    pub dirty: PatternSet,
    pub clean: PatternSet,
    pub sources: SourceIndex,
    pub dirty_stats: LoadStats,
    pub clean_stats: LoadStats,
}

impl Patterns {
    pub fn set(&self, category: Category) -> &PatternSet {
        match category {
            Category::Dirty => &self.dirty,
            Category::Clean => &self.clean,
        }
    }

    pub(crate) fn set_mut(&mut self, category: Category) -> &mut PatternSet {
        match category {
            Category::Dirty => &mut self.dirty,
            Category::Clean => &mut self.clean,
        }
    }

    pub(crate) fn stats_mut(&mut self, category: Category) -> &mut LoadStats {
        match category {
            Category::Dirty => &mut self.dirty_stats,
            Category::Clean => &mut self.clean_stats,
        }
    }
}

#[cfg(test)]
#[path = "set_tests.rs"]
mod tests;
