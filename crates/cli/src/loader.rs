// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern loading from `.txt` files.
//!
//! Every `.txt` file directly inside a pattern directory is read line by
//! line. Each non-blank line (after trimming) becomes one pattern. Files
//! are visited in filename order, so when two files contribute the same
//! pattern the later filename is the one recorded in the source index.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::pattern::{Category, Pattern, Patterns};

/// Extension of pattern files (case-sensitive).
pub const PATTERN_FILE_SUFFIX: &str = ".txt";

/// Options controlling how patterns are loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Do not read the clean directory at all.
    pub skip_clean: bool,
    /// Wrap each line in `\b` word-boundary anchors.
    pub anchor: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { skip_clean: false, anchor: true }
    }
}

/// Load dirty patterns and, unless skipped, clean patterns.
///
/// Fails on the first bad directory, unreadable file, or invalid pattern.
/// Nothing loaded before the failure is returned.
pub fn load(dirty_dir: &Path, clean_dir: Option<&Path>, options: &LoadOptions) -> Result<Patterns> {
    let mut patterns = Patterns::default();

    load_category(&mut patterns, dirty_dir, Category::Dirty, options.anchor)?;

    match clean_dir {
        Some(dir) if !options.skip_clean => {
            load_category(&mut patterns, dir, Category::Clean, options.anchor)?;
        }
        Some(dir) => tracing::debug!("skipping clean patterns in {}", dir.display()),
        None => {}
    }

    Ok(patterns)
}

fn load_category(
    patterns: &mut Patterns,
    dir: &Path,
    category: Category,
    anchor: bool,
) -> Result<()> {
    for path in pattern_files(dir)? {
        let file = file_name(&path);
        tracing::debug!("reading {} file: {}", category, file);

        let content = fs::read_to_string(&path)
            .map_err(|source| Error::UnreadableFile { path: path.clone(), source })?;
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

        let mut accepted = 0;
        for line in content.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let pattern = Pattern::compile(line, anchor, &file)?;
            patterns.sources.record(pattern.as_str(), category, &file);
            tracing::debug!("added {} pattern: {}", category, pattern);
            patterns.set_mut(category).insert(pattern);
            accepted += 1;
        }

        let stats = patterns.stats_mut(category);
        stats.files += 1;
        stats.lines += accepted;
    }

    let stats = patterns.stats_mut(category);
    let (files, lines) = (stats.files, stats.lines);
    tracing::info!(
        "loaded {} {} patterns ({} unique) from {} files in {}",
        lines,
        category,
        patterns.set(category).len(),
        files,
        dir.display()
    );
    Ok(())
}

/// List `.txt` files directly inside `dir`, sorted by path.
pub fn pattern_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::InvalidDirectory { path: dir.to_path_buf() });
    }

    let unreadable = |source| Error::UnreadableFile { path: dir.to_path_buf(), source };
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        let path = entry.map_err(unreadable)?.path();
        // Non-UTF-8 names still qualify when their suffix is `.txt`
        let is_pattern_file = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with(PATTERN_FILE_SUFFIX));
        if is_pattern_file && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
