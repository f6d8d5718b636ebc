//! Structured error types for routeprof
//!
//! Using thiserror for automatic Display implementation and error chaining.

use std::path::PathBuf;

use super::types::IntervalMs;
use thiserror::Error;

/// Fatal configuration-load errors.
///
/// Any of these aborts the load for the whole process: the host must
/// refuse to start (or reload) rather than serve with an unresolved scope.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("scope path must begin with '/': \"{0}\"")]
    InvalidScope(String),

    #[error("scope \"{0}\" declared more than once")]
    DuplicateScope(String),

    #[error("sample interval for scope \"{scope}\" must be a positive number of milliseconds")]
    InvalidInterval { scope: String },

    #[error("output path too long: {}", path.display())]
    PathTooLong { path: PathBuf },

    #[error("failed to stat \"{}\": {source}", path.display())]
    StatFailed { path: PathBuf, source: std::io::Error },

    #[error("failed to create directory \"{}\": {source}", path.display())]
    CreateFailed { path: PathBuf, source: std::io::Error },

    #[error("\"{}\" exists and is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error(
        "conflicting sample intervals: scope \"{first_scope}\" resolved {first} \
         but scope \"{other_scope}\" resolved {other}"
    )]
    ConflictingIntervals {
        first_scope: String,
        first: IntervalMs,
        other_scope: String,
        other: IntervalMs,
    },
}

/// Non-fatal runtime sampling errors.
///
/// Logged when the timer fires; never stops the timer from re-arming and
/// never touches the request path.
#[derive(Error, Debug)]
pub enum SampleError {
    #[error("collector failed: {0}")]
    CollectorFailed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
