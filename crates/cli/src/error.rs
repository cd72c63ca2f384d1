// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::io;
use std::path::PathBuf;

/// Errors raised while resolving directories or loading patterns.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A dirty or clean path that is missing or not a directory.
    #[error("{} is not a valid directory", path.display())]
    InvalidDirectory { path: PathBuf },

    /// A pattern file (or its directory listing) could not be read.
    #[error("failed to read {}: {source}", path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line did not compile as a regular expression once anchored.
    #[error("invalid pattern {pattern:?} in {file}: {source}")]
    InvalidPatternSyntax {
        pattern: String,
        file: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    /// A default pattern directory could not be created.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file could not be read or parsed.
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    /// Bad directory, unreadable file, or invalid pattern.
    Failure = 1,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
