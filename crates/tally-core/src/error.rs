//! Error types for parsing user-supplied values into domain types.

use thiserror::Error;

/// A filter name that is not one of `all`, `active` or `completed`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown filter mode: {0:?} (expected all, active or completed)")]
pub struct ParseFilterModeError(pub String);

/// A time format description rejected by the `time` crate.
#[derive(Error, Debug)]
#[error("invalid time format {format:?}: {source}")]
pub struct TimeFormatError {
    /// The description as written by the user.
    pub format: String,
    /// Underlying parser error.
    #[source]
    pub source: time::error::InvalidFormatDescription,
}
