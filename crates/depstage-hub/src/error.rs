//! Hub snapshot error types

use thiserror::Error;

/// Hub snapshot errors
#[derive(Error, Debug)]
pub enum HubError {
    /// Hub API request failed
    #[error("Hub API error: {0}")]
    Api(#[from] hf_hub::api::tokio::ApiError),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
