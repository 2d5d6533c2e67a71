//! Crate-level error types.

use std::fmt;

/// Errors produced by the biolab crate.
///
/// Only file-system and serialization paths surface these; unknown
/// molecules, bad kinetics input and corrupt persisted entries are
/// recovered locally and logged instead.
#[derive(Debug)]
pub enum LabError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// JSON serialization failure for a persisted entry.
    Json(serde_json::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Durable key-value store rejected an operation.
    Storage(String),
}

impl fmt::Display for LabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Storage(msg) => write!(f, "storage error: {msg}"),
        }
    }
}

impl std::error::Error for LabError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LabError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for LabError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
