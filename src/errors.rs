use std::path::PathBuf;

use thiserror::Error;

/// Error type that captures ledger and configuration failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Form for `{expected}` cannot commit into the `{found}` ledger")]
    SchemaMismatch { expected: String, found: String },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Failures raised while handing a rendered report to the print/share collaborators.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Export directory is not usable: {0}")]
    NoExportDirectory(PathBuf),
    #[error("Share failed: {0}")]
    ShareFailed(String),
}
