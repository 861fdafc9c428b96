//! Direct artifact download management for depstage
//!
//! This module handles fetching the fixed set of binary artifacts the
//! serving stack needs at runtime (native libraries, the document parser
//! server jar, a tokenizer vocabulary, browser binaries) into the working
//! directory.

pub mod error;
pub mod fetcher;
pub mod registry;

pub use error::ArtifactError;
pub use fetcher::{ArtifactFetcher, DownloadProgress};
pub use registry::{filename_from_url, ArtifactInfo, ArtifactKind, ARTIFACTS};
