// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolution of pattern directories and load options.
//!
//! Precedence is command line, then config file, then defaults. When no
//! directory is named anywhere, `./dirty` and `./clean` are used and
//! created if missing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::loader::LoadOptions;

/// Default dirty pattern folder name.
pub const DEFAULT_DIRTY_DIR: &str = "dirty";
/// Default clean pattern folder name.
pub const DEFAULT_CLEAN_DIR: &str = "clean";

/// Validated directories and options ready for loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub dirty: PathBuf,
    /// None when clean patterns are skipped.
    pub clean: Option<PathBuf>,
    pub options: LoadOptions,
}

impl Settings {
    /// Merge command line and config, then validate the directories.
    pub fn resolve(cli: &Cli, config: &Config, cwd: &Path) -> Result<Self> {
        let options = LoadOptions {
            skip_clean: cli.no_clean || config.no_clean,
            anchor: !cli.no_anchor && config.anchor.unwrap_or(true),
        };

        let dirty = cli.dirty_dir().or(config.dirty.as_ref()).map(|dir| cwd.join(dir));
        let clean = cli.clean_dir().or(config.clean.as_ref()).map(|dir| cwd.join(dir));

        if dirty.is_none() && clean.is_none() {
            let dirty = cwd.join(DEFAULT_DIRTY_DIR);
            create_default_dir(&dirty)?;
            let clean = if options.skip_clean {
                None
            } else {
                let clean = cwd.join(DEFAULT_CLEAN_DIR);
                create_default_dir(&clean)?;
                Some(clean)
            };
            return Ok(Self { dirty, clean, options });
        }

        let dirty = require_dir(dirty.unwrap_or_else(|| cwd.join(DEFAULT_DIRTY_DIR)))?;
        let clean = if options.skip_clean {
            None
        } else {
            Some(require_dir(clean.unwrap_or_else(|| cwd.join(DEFAULT_CLEAN_DIR)))?)
        };
        Ok(Self { dirty, clean, options })
    }
}

fn require_dir(path: PathBuf) -> Result<PathBuf> {
    if path.is_dir() { Ok(path) } else { Err(Error::InvalidDirectory { path }) }
}

fn create_default_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        tracing::info!("creating {}", path.display());
        fs::create_dir_all(path)
            .map_err(|source| Error::CreateDirectory { path: path.to_path_buf(), source })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
