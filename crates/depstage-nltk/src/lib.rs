//! NLTK linguistic resource provisioning for depstage
//!
//! Downloads the wordnet, punkt, and omw-1.4 resource bundles into the
//! standard nltk_data locations and applies the punkt_tab compatibility
//! layout expected by newer resource-discovery code.

pub mod error;
pub mod installer;
pub mod layout;
pub mod registry;

pub use error::NltkError;
pub use installer::{copy_legacy_models, ResourceInstaller};
pub use layout::{DataLayout, NLTK_DATA_ENV};
pub use registry::{ResourceCategory, ResourceInfo, RESOURCES};
