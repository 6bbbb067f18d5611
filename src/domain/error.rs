use std::io;

use thiserror::Error;

/// Library-wide error type for tsnew operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A package manifest is already present in the working directory.
    #[error("A package.json already exists in this directory.")]
    ManifestExists,

    /// Package manager invocation failed to spawn or exited non-zero.
    #[error("Package manager command failed: {command}: {details}")]
    PackageManager { command: String, details: String },

    /// Embedded configuration asset is missing or malformed.
    #[error("Invalid embedded config {file}: {details}")]
    InvalidConfigAsset { file: String, details: String },

    /// Configuration record could not be serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
