use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CdmGuardError {
    /// The message or thresholds value is structurally malformed and cannot be
    /// checked at all. Distinct from a FAIL finding, which means the input is
    /// well-formed but operationally wrong.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Rules error: {0}")]
    Rules(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported input format '{extension}' for {path} (use .json or .toml)")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CdmGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
