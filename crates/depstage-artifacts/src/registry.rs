//! Artifact registry with download information

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Artifact kind enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// Native shared library package
    NativeLibrary,
    /// Document parser server jar
    ParserServer,
    /// Companion checksum file
    Checksum,
    /// Tokenizer vocabulary file
    TokenizerVocab,
    /// Browser or driver binary
    Browser,
}

/// Artifact information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactInfo {
    /// Artifact identifier
    pub id: String,
    /// Artifact kind
    pub kind: ArtifactKind,
    /// Download URL
    pub url: String,
    /// Approximate file size in bytes
    pub size_bytes: u64,
    /// SHA256 hash for verification (empty if unknown)
    pub sha256: String,
    /// Description
    pub description: String,
}

impl ArtifactInfo {
    /// Destination filename, derived from the download URL
    pub fn filename(&self) -> String {
        filename_from_url(&self.url)
    }
}

/// Derive the destination filename for a URL: the final `/`-delimited path
/// segment, with any query string or fragment stripped.
pub fn filename_from_url(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit('/').next().unwrap_or(path).to_string()
}

/// Artifacts to fetch into the working directory, in download order
pub static ARTIFACTS: LazyLock<Vec<ArtifactInfo>> = LazyLock::new(|| {
    vec![
        ArtifactInfo {
            id: "libssl-amd64".to_string(),
            kind: ArtifactKind::NativeLibrary,
            url: "http://archive.ubuntu.com/ubuntu/pool/main/o/openssl/libssl1.1_1.1.1f-1ubuntu2_amd64.deb".to_string(),
            size_bytes: 1_320_000,
            sha256: String::new(),
            description: "OpenSSL 1.1 runtime, amd64 (~1.3MB)".to_string(),
        },
        ArtifactInfo {
            id: "libssl-arm64".to_string(),
            kind: ArtifactKind::NativeLibrary,
            url: "http://ports.ubuntu.com/pool/main/o/openssl/libssl1.1_1.1.1f-1ubuntu2_arm64.deb".to_string(),
            size_bytes: 1_260_000,
            sha256: String::new(),
            description: "OpenSSL 1.1 runtime, arm64 (~1.3MB)".to_string(),
        },
        ArtifactInfo {
            id: "tika-server".to_string(),
            kind: ArtifactKind::ParserServer,
            url: "https://repo1.maven.org/maven2/org/apache/tika/tika-server-standard/3.0.0/tika-server-standard-3.0.0.jar".to_string(),
            size_bytes: 118_000_000,
            sha256: String::new(),
            description: "Apache Tika document parser server (~118MB)".to_string(),
        },
        ArtifactInfo {
            id: "tika-server-md5".to_string(),
            kind: ArtifactKind::Checksum,
            url: "https://repo1.maven.org/maven2/org/apache/tika/tika-server-standard/3.0.0/tika-server-standard-3.0.0.jar.md5".to_string(),
            size_bytes: 32,
            sha256: String::new(),
            description: "Published MD5 for the Tika server jar".to_string(),
        },
        ArtifactInfo {
            id: "cl100k-base".to_string(),
            kind: ArtifactKind::TokenizerVocab,
            url: "https://openaipublic.blob.core.windows.net/encodings/cl100k_base.tiktoken".to_string(),
            size_bytes: 1_700_000,
            sha256: String::new(),
            description: "cl100k_base tokenizer vocabulary (~1.7MB)".to_string(),
        },
        ArtifactInfo {
            id: "chrome-linux64".to_string(),
            kind: ArtifactKind::Browser,
            url: "https://bit.ly/chrome-linux64-121-0-6167-85".to_string(),
            size_bytes: 155_000_000,
            sha256: String::new(),
            description: "Chrome for Testing 121.0.6167.85 (~155MB)".to_string(),
        },
        ArtifactInfo {
            id: "chromedriver-linux64".to_string(),
            kind: ArtifactKind::Browser,
            url: "https://bit.ly/chromedriver-linux64-121-0-6167-85".to_string(),
            size_bytes: 8_400_000,
            sha256: String::new(),
            description: "Chromedriver 121.0.6167.85 (~8.4MB)".to_string(),
        },
    ]
});

/// Get artifact info by ID
pub fn get_artifact(id: &str) -> Option<ArtifactInfo> {
    ARTIFACTS.iter().find(|a| a.id == id).cloned()
}

/// Get all artifacts of a specific kind
pub fn get_artifacts_by_kind(kind: ArtifactKind) -> Vec<ArtifactInfo> {
    ARTIFACTS.iter().filter(|a| a.kind == kind).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_is_last_path_segment() {
        assert_eq!(
            filename_from_url("https://example.com/path/to/file.ext"),
            "file.ext"
        );
        assert_eq!(filename_from_url("https://example.com/file.ext"), "file.ext");
    }

    #[test]
    fn test_filename_ignores_query_and_fragment() {
        assert_eq!(
            filename_from_url("https://example.com/path/to/file.ext?sig=abc&x=1"),
            "file.ext"
        );
        assert_eq!(
            filename_from_url("https://example.com/a/b/file.ext#section"),
            "file.ext"
        );
    }

    #[test]
    fn test_filename_without_extension() {
        // Shortened browser URLs carry no extension at all
        assert_eq!(
            filename_from_url("https://bit.ly/chrome-linux64-121-0-6167-85"),
            "chrome-linux64-121-0-6167-85"
        );
    }

    #[test]
    fn test_registry_filenames() {
        for artifact in ARTIFACTS.iter() {
            assert!(!artifact.filename().is_empty(), "{} has no filename", artifact.id);
        }
        let jar = get_artifact("tika-server").unwrap();
        assert_eq!(jar.filename(), "tika-server-standard-3.0.0.jar");
        let md5 = get_artifact("tika-server-md5").unwrap();
        assert_eq!(md5.filename(), "tika-server-standard-3.0.0.jar.md5");
    }

    #[test]
    fn test_registry_order_and_kinds() {
        assert_eq!(ARTIFACTS.len(), 7);
        assert_eq!(ARTIFACTS[0].id, "libssl-amd64");
        assert_eq!(get_artifacts_by_kind(ArtifactKind::Browser).len(), 2);
    }
}
