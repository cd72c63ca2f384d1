// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration file parsing.
//!
//! `wordcheck.toml` is optional. Every key is optional and command-line
//! flags take precedence over it.
//!
//! ```toml
//! dirty = "lists/dirty"
//! clean = "lists/clean"
//! no_clean = false
//! anchor = true
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "wordcheck.toml";

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Dirty pattern directory, relative to the config file.
    pub dirty: Option<PathBuf>,

    /// Clean pattern directory, relative to the config file.
    pub clean: Option<PathBuf>,

    /// Skip the clean pattern directory.
    #[serde(default)]
    pub no_clean: bool,

    /// Wrap patterns in word-boundary anchors (default: true).
    pub anchor: Option<bool>,
}

/// Load and parse a config file, resolving its paths against the file's directory.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config { path: path.to_path_buf(), message: e.to_string() })?;
    let mut config = parse(&content, path)?;

    if let Some(base) = path.parent() {
        config.dirty = config.dirty.map(|dir| base.join(dir));
        config.clean = config.clean.map(|dir| base.join(dir));
    }

    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Parse config content. `path` is only used in error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    toml::from_str(content)
        .map_err(|e| Error::Config { path: path.to_path_buf(), message: e.message().to_string() })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
