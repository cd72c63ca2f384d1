// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::color::ColorMode;

/// Check words against dirty and clean regex pattern lists
#[derive(Debug, Parser)]
#[command(name = "wordcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Dirty pattern folder (legacy positional form)
    #[arg(value_name = "DIRTY_FOLDER")]
    pub dirty_folder: Option<PathBuf>,

    /// Clean pattern folder (legacy positional form)
    #[arg(value_name = "CLEAN_FOLDER")]
    pub clean_folder: Option<PathBuf>,

    /// Folder of dirty pattern files [default: ./dirty]
    #[arg(short, long, value_name = "DIR")]
    pub dirty: Option<PathBuf>,

    /// Folder of clean pattern files [default: ./clean]
    #[arg(short, long, value_name = "DIR")]
    pub clean: Option<PathBuf>,

    /// Do not load clean patterns
    #[arg(long)]
    pub no_clean: bool,

    /// Use each line as-is instead of wrapping it in word boundaries
    #[arg(long)]
    pub no_anchor: bool,

    /// Check these words and exit instead of prompting
    #[arg(short = 'w', long = "word", value_name = "WORD")]
    pub words: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Use specific config file
    #[arg(short = 'C', long = "config")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse process arguments, accepting the legacy `-no-clean` spelling.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Dirty folder given on the command line; the named option wins.
    pub fn dirty_dir(&self) -> Option<&PathBuf> {
        self.dirty.as_ref().or(self.dirty_folder.as_ref())
    }

    /// Clean folder given on the command line; the named option wins.
    pub fn clean_dir(&self) -> Option<&PathBuf> {
        self.clean.as_ref().or(self.clean_folder.as_ref())
    }
}

/// Rewrite the legacy single-dash `-no-clean` flag to `--no-clean`.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| if arg == "-no-clean" { OsString::from("--no-clean") } else { arg })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
