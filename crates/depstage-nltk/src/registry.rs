//! Linguistic resource registry with download information

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Package index the resource archives are published under
const PACKAGE_BASE: &str =
    "https://raw.githubusercontent.com/nltk/nltk_data/gh-pages/packages";

/// Resource category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    /// Corpus data
    Corpora,
    /// Tokenizer models
    Tokenizers,
}

impl ResourceCategory {
    /// Get the subdirectory name for this category
    pub fn subdirectory(&self) -> &'static str {
        match self {
            ResourceCategory::Corpora => "corpora",
            ResourceCategory::Tokenizers => "tokenizers",
        }
    }
}

/// Linguistic resource information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceInfo {
    /// Resource identifier
    pub id: String,
    /// Resource category
    pub category: ResourceCategory,
    /// Download URL of the packaged archive
    pub url: String,
    /// Description
    pub description: String,
}

impl ResourceInfo {
    fn packaged(id: &str, category: ResourceCategory, description: &str) -> Self {
        Self {
            id: id.to_string(),
            category,
            url: format!("{}/{}/{}.zip", PACKAGE_BASE, category.subdirectory(), id),
            description: description.to_string(),
        }
    }
}

/// Required linguistic resources, installed in order
pub static RESOURCES: LazyLock<Vec<ResourceInfo>> = LazyLock::new(|| {
    vec![
        ResourceInfo::packaged(
            "wordnet",
            ResourceCategory::Corpora,
            "WordNet lexical database",
        ),
        ResourceInfo::packaged(
            "punkt",
            ResourceCategory::Tokenizers,
            "Punkt sentence tokenizer models",
        ),
        ResourceInfo::packaged(
            "omw-1.4",
            ResourceCategory::Corpora,
            "Open Multilingual Wordnet 1.4",
        ),
    ]
});

/// Get resource info by ID
pub fn get_resource(id: &str) -> Option<ResourceInfo> {
    RESOURCES.iter().find(|r| r.id == id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order() {
        let ids: Vec<&str> = RESOURCES.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["wordnet", "punkt", "omw-1.4"]);
    }

    #[test]
    fn test_package_urls() {
        let punkt = get_resource("punkt").unwrap();
        assert_eq!(
            punkt.url,
            "https://raw.githubusercontent.com/nltk/nltk_data/gh-pages/packages/tokenizers/punkt.zip"
        );
        let omw = get_resource("omw-1.4").unwrap();
        assert!(omw.url.ends_with("/corpora/omw-1.4.zip"));
    }
}
