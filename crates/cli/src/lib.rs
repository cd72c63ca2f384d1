// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check words against dirty and clean regex pattern lists.
//!
//! Patterns are loaded once from `.txt` files ([`loader`]) and evaluated
//! per word with a two-tier rule ([`pattern::evaluate`]): clean patterns
//! are only consulted after a dirty pattern matched.

pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod loader;
pub mod pattern;
pub mod report;
pub mod session;
pub mod settings;

#[cfg(test)]
pub mod test_utils;

pub use error::{Error, ExitCode, Result};
pub use loader::{LoadOptions, load};
pub use pattern::{Category, MatchResult, Pattern, PatternSet, Patterns, SourceIndex, evaluate};
