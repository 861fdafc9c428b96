//! Candidate nltk_data directory layout

use std::path::{Path, PathBuf};

use directories::UserDirs;

use crate::error::NltkError;

/// Environment variable NLTK-based tools read to locate resource data
pub const NLTK_DATA_ENV: &str = "NLTK_DATA";

/// Ordered search path of candidate nltk_data directories.
///
/// The first entry is authoritative: downloads land there and `NLTK_DATA`
/// is pointed at it. The remaining entries are only created so that tools
/// scanning the standard locations find a directory.
#[derive(Debug, Clone)]
pub struct DataLayout {
    data_dir: PathBuf,
    search_path: Vec<PathBuf>,
}

impl DataLayout {
    /// Layout with an explicit authoritative directory plus extra candidates
    pub fn new(data_dir: PathBuf, extra_candidates: Vec<PathBuf>) -> Self {
        let mut search_path = vec![data_dir.clone()];
        search_path.extend(extra_candidates);
        Self {
            data_dir,
            search_path,
        }
    }

    /// The standard candidate list, rooted at the given working directory
    pub fn standard(workdir: &Path) -> Result<Self, NltkError> {
        let user_dirs = UserDirs::new().ok_or(NltkError::HomeDirectory)?;
        Ok(Self::new(
            workdir.join("nltk_data"),
            vec![
                user_dirs.home_dir().join("nltk_data"),
                PathBuf::from("/usr/share/nltk_data"),
                PathBuf::from("/usr/local/share/nltk_data"),
            ],
        ))
    }

    /// The authoritative data directory
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// All candidate directories, authoritative first
    pub fn search_path(&self) -> &[PathBuf] {
        &self.search_path
    }

    /// Create every candidate directory (idempotent)
    pub fn prepare(&self) -> Result<(), NltkError> {
        for dir in &self.search_path {
            std::fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    /// Point NLTK-based tools at the authoritative directory.
    ///
    /// Provisioning never reads this variable back; its own lookups go
    /// through [`DataLayout::find`].
    pub fn export_env(&self) {
        std::env::set_var(NLTK_DATA_ENV, self.data_dir.as_os_str());
    }

    /// Resolve a resource path against the candidate search path.
    /// Returns the first candidate under which the path exists.
    pub fn find(&self, resource_path: &str) -> Option<PathBuf> {
        self.search_path
            .iter()
            .map(|dir| dir.join(resource_path))
            .find(|candidate| candidate.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_standard_layout() {
        let layout = DataLayout::standard(Path::new("/work")).unwrap();
        assert_eq!(layout.data_dir(), Path::new("/work/nltk_data"));
        assert_eq!(layout.search_path().len(), 4);
        assert_eq!(layout.search_path()[0], layout.data_dir());
        assert_eq!(
            layout.search_path()[2],
            PathBuf::from("/usr/share/nltk_data")
        );
    }

    #[test]
    fn test_prepare_creates_all_candidates() {
        let dir = TempDir::new().unwrap();
        let layout = DataLayout::new(
            dir.path().join("primary"),
            vec![dir.path().join("secondary")],
        );
        layout.prepare().unwrap();
        assert!(dir.path().join("primary").is_dir());
        assert!(dir.path().join("secondary").is_dir());
    }

    #[test]
    fn test_find_prefers_earlier_candidates() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first");
        let second = dir.path().join("second");
        std::fs::create_dir_all(first.join("tokenizers/punkt")).unwrap();
        std::fs::create_dir_all(second.join("tokenizers/punkt")).unwrap();

        let layout = DataLayout::new(first.clone(), vec![second]);
        assert_eq!(
            layout.find("tokenizers/punkt"),
            Some(first.join("tokenizers/punkt"))
        );
        assert_eq!(layout.find("tokenizers/missing"), None);
    }
}
