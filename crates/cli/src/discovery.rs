// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! The nearest ancestor holding `wordcheck.toml` supplies the config. The
//! search stops early at a directory that already has its own `dirty/` and
//! `clean/` folders (those folders belong to that directory, not to a config
//! further up) or at a git root.

use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;
use crate::settings::{DEFAULT_CLEAN_DIR, DEFAULT_DIRTY_DIR};

/// Find wordcheck.toml in `start_dir` or its ancestors.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            return Some(config_path);
        }
        if has_pattern_dirs(dir) || dir.join(".git").exists() {
            tracing::debug!("no {} found at or below {}", CONFIG_FILE_NAME, dir.display());
            return None;
        }
    }
    None
}

/// True if `dir` holds both default pattern folders.
pub fn has_pattern_dirs(dir: &Path) -> bool {
    dir.join(DEFAULT_DIRTY_DIR).is_dir() && dir.join(DEFAULT_CLEAN_DIR).is_dir()
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
