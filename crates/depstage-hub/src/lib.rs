//! Model hub snapshot retrieval for depstage
//!
//! Pulls full model repository snapshots from the Hugging Face hub through
//! a mirror endpoint and materializes them under `huggingface.co/<org>/<model>`
//! in the working directory.

pub mod error;
pub mod registry;
pub mod snapshot;

pub use error::HubError;
pub use registry::{HF_MIRROR_ENDPOINT, MODEL_REPOS};
pub use snapshot::SnapshotFetcher;
