//! Resource provisioning error types

use thiserror::Error;

/// Resource provisioning errors
#[derive(Error, Debug)]
pub enum NltkError {
    /// Download failed
    #[error("Download failed: {0}")]
    DownloadFailed(String),

    /// A required resource could not be installed
    #[error("Failed to install resource {resource}: {source}")]
    ResourceInstall {
        resource: String,
        #[source]
        source: Box<NltkError>,
    },

    /// Archive extraction failed
    #[error("Archive extraction failed: {0}")]
    ExtractionFailed(#[from] zip::result::ZipError),

    /// Home directory could not be determined
    #[error("Could not determine home directory")]
    HomeDirectory,

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// HTTP error
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}
