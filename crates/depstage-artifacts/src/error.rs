//! Artifact download error types

use thiserror::Error;

/// Artifact download errors
#[derive(Error, Debug)]
pub enum ArtifactError {
    /// Download failed
    #[error("Download failed: {0}")]
    DownloadFailed(String),

    /// Verification failed
    #[error("Artifact verification failed: expected {expected}, got {actual}")]
    VerificationFailed {
        expected: String,
        actual: String,
    },

    /// Artifact not found
    #[error("Artifact not found: {0}")]
    ArtifactNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// HTTP error
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}
