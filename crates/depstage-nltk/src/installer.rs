//! Resource download, extraction, and the punkt_tab compatibility shim

use std::path::{Path, PathBuf};

use futures::StreamExt;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use crate::error::NltkError;
use crate::layout::DataLayout;
use crate::registry::{ResourceInfo, RESOURCES};

/// Extension of the legacy binary tokenizer models
const LEGACY_MODEL_EXT: &str = "pickle";

/// Resource path newer discovery code expects the English punkt models under
const PUNKT_TAB_ENGLISH: &str = "tokenizers/punkt_tab/english";

/// Downloads and installs linguistic resources into a [`DataLayout`]
pub struct ResourceInstaller {
    layout: DataLayout,
    client: reqwest::Client,
}

impl ResourceInstaller {
    /// Create an installer for the given layout
    pub fn new(layout: DataLayout) -> Result<Self, NltkError> {
        Ok(Self {
            layout,
            client: reqwest::Client::builder()
                .user_agent("depstage/0.1.0")
                .build()
                .map_err(|e| NltkError::DownloadFailed(e.to_string()))?,
        })
    }

    /// The layout this installer writes into
    pub fn layout(&self) -> &DataLayout {
        &self.layout
    }

    /// Run the full provisioning sequence: create the candidate
    /// directories, export the lookup environment for downstream tools,
    /// install every registry resource, then apply the punkt_tab shim.
    ///
    /// Resource installation is required and aborts the sequence on the
    /// first failure; the shim is advisory and only ever warns.
    pub async fn provision(&self) -> Result<(), NltkError> {
        self.layout.prepare()?;
        self.layout.export_env();
        self.install_all(&RESOURCES).await?;
        self.provision_punkt_tab().await;
        Ok(())
    }

    /// Install resources strictly in order. The first failure is wrapped
    /// with the resource name and returned without attempting the rest.
    pub async fn install_all(&self, resources: &[ResourceInfo]) -> Result<(), NltkError> {
        for resource in resources {
            info!("Installing NLTK resource: {}", resource.id);
            self.install(resource)
                .await
                .map_err(|source| NltkError::ResourceInstall {
                    resource: resource.id.clone(),
                    source: Box::new(source),
                })?;
        }
        Ok(())
    }

    /// Directory the resource extracts into
    pub fn resource_dir(&self, resource: &ResourceInfo) -> PathBuf {
        self.layout
            .data_dir()
            .join(resource.category.subdirectory())
            .join(&resource.id)
    }

    /// Download and extract a single resource package.
    ///
    /// An already-extracted resource is left untouched and no request is
    /// made.
    pub async fn install(&self, resource: &ResourceInfo) -> Result<(), NltkError> {
        let category_dir = self
            .layout
            .data_dir()
            .join(resource.category.subdirectory());
        let extracted = category_dir.join(&resource.id);

        if extracted.exists() {
            info!("Resource {} already installed", resource.id);
            return Ok(());
        }

        fs::create_dir_all(&category_dir).await?;

        let zip_path = category_dir.join(format!("{}.zip", resource.id));
        self.download_package(resource, &zip_path).await?;
        extract_package(&zip_path, &category_dir)?;

        info!("Resource {} installed", resource.id);
        Ok(())
    }

    async fn download_package(
        &self,
        resource: &ResourceInfo,
        zip_path: &Path,
    ) -> Result<(), NltkError> {
        // An archive left over from an earlier run is reused
        if zip_path.exists() {
            return Ok(());
        }

        let response = self
            .client
            .get(&resource.url)
            .send()
            .await
            .map_err(|e| NltkError::DownloadFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NltkError::DownloadFailed(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        let temp_path = zip_path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path).await?;
        let mut stream = response.bytes_stream();

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result.map_err(|e| NltkError::DownloadFailed(e.to_string()))?;
            file.write_all(&chunk).await?;
        }

        file.flush().await?;
        drop(file);

        fs::rename(&temp_path, zip_path).await?;
        Ok(())
    }

    /// Copy the legacy punkt models into the directory layout newer
    /// resource-discovery code expects (`tokenizers/punkt_tab/english`).
    ///
    /// The shim is advisory: every failure is logged as a warning and
    /// provisioning continues regardless.
    pub async fn provision_punkt_tab(&self) {
        let punkt_dir = self.layout.data_dir().join("tokenizers").join("punkt");
        let punkt_tab_dir = self
            .layout
            .data_dir()
            .join("tokenizers")
            .join("punkt_tab")
            .join("english");

        if let Err(e) = std::fs::create_dir_all(&punkt_tab_dir) {
            warn!("Could not create {}: {}", punkt_tab_dir.display(), e);
            return;
        }

        if punkt_dir.exists() {
            match copy_legacy_models(&punkt_dir, &punkt_tab_dir) {
                Ok(copied) => info!(
                    "Copied {} legacy punkt model(s) into {}",
                    copied,
                    punkt_tab_dir.display()
                ),
                Err(e) => warn!("Legacy punkt model copy failed: {}", e),
            }
        }

        // Confirm the new layout actually resolves to model files; fall
        // back to the single English model when it does not.
        let resolved = self
            .layout
            .find(PUNKT_TAB_ENGLISH)
            .is_some_and(|dir| dir_has_models(&dir));

        if resolved {
            info!("punkt_tab resources configured");
        } else {
            warn!("punkt_tab resources still unresolved, copying the English model directly");
            let src = punkt_dir.join("english.pickle");
            let dst = punkt_tab_dir.join("english.pickle");
            match std::fs::copy(&src, &dst) {
                Ok(_) => info!("Copied {} to {}", src.display(), dst.display()),
                Err(e) => warn!("Fallback punkt model copy failed: {}", e),
            }
        }
    }
}

/// Copy every legacy model file directly under `legacy_dir` into `new_dir`,
/// returning how many files were copied. Files with other extensions are
/// left behind.
pub fn copy_legacy_models(legacy_dir: &Path, new_dir: &Path) -> Result<usize, NltkError> {
    let mut copied = 0;

    for entry in std::fs::read_dir(legacy_dir)? {
        let entry = entry?;
        let src = entry.path();
        if !src.is_file() || !is_legacy_model(&src) {
            continue;
        }

        let dst = new_dir.join(entry.file_name());
        std::fs::copy(&src, &dst)?;
        info!("Copied {} to {}", src.display(), dst.display());
        copied += 1;
    }

    Ok(copied)
}

fn is_legacy_model(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == LEGACY_MODEL_EXT)
        .unwrap_or(false)
}

fn dir_has_models(dir: &Path) -> bool {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .flatten()
            .any(|entry| is_legacy_model(&entry.path())),
        Err(_) => false,
    }
}

/// Extract a resource package into its category directory. Packages carry
/// the resource directory as their top-level archive entry.
fn extract_package(zip_path: &Path, dest_dir: &Path) -> Result<(), NltkError> {
    let file = std::fs::File::open(zip_path)?;
    let mut archive = zip::ZipArchive::new(file)?;
    archive.extract(dest_dir)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ResourceCategory;
    use tempfile::TempDir;

    fn test_layout(dir: &TempDir) -> DataLayout {
        DataLayout::new(dir.path().join("nltk_data"), Vec::new())
    }

    fn unreachable_resource(id: &str) -> ResourceInfo {
        ResourceInfo {
            id: id.to_string(),
            category: ResourceCategory::Corpora,
            url: format!("http://127.0.0.1:1/packages/corpora/{}.zip", id),
            description: "Test resource".to_string(),
        }
    }

    #[test]
    fn test_copy_legacy_models_filters_by_extension() {
        let dir = TempDir::new().unwrap();
        let legacy = dir.path().join("punkt");
        let new = dir.path().join("punkt_tab/english");
        std::fs::create_dir_all(&legacy).unwrap();
        std::fs::create_dir_all(&new).unwrap();
        std::fs::write(legacy.join("a.pickle"), b"model").unwrap();
        std::fs::write(legacy.join("b.txt"), b"notes").unwrap();

        let copied = copy_legacy_models(&legacy, &new).unwrap();

        assert_eq!(copied, 1);
        assert!(new.join("a.pickle").exists());
        assert!(!new.join("b.txt").exists());
        // source files stay in place
        assert!(legacy.join("a.pickle").exists());
        assert!(legacy.join("b.txt").exists());
    }

    #[tokio::test]
    async fn test_install_all_stops_at_first_failure() {
        let dir = TempDir::new().unwrap();
        let layout = test_layout(&dir);
        layout.prepare().unwrap();
        let installer = ResourceInstaller::new(layout).unwrap();

        let first = unreachable_resource("wordnet");
        let second = unreachable_resource("omw-1.4");

        let err = installer
            .install_all(&[first, second.clone()])
            .await
            .unwrap_err();

        assert!(err.to_string().contains("wordnet"));
        // the second resource was never attempted
        assert!(!installer.resource_dir(&second).exists());
    }

    #[tokio::test]
    async fn test_install_skips_existing_resource() {
        let dir = TempDir::new().unwrap();
        let layout = test_layout(&dir);
        let installer = ResourceInstaller::new(layout).unwrap();

        let resource = unreachable_resource("wordnet");
        std::fs::create_dir_all(installer.resource_dir(&resource)).unwrap();

        // No request is made for an installed resource, so the dead URL
        // never gets a chance to fail
        installer.install(&resource).await.unwrap();
    }

    #[tokio::test]
    async fn test_punkt_tab_shim_copies_models() {
        let dir = TempDir::new().unwrap();
        let layout = test_layout(&dir);
        let punkt = layout.data_dir().join("tokenizers/punkt");
        std::fs::create_dir_all(&punkt).unwrap();
        std::fs::write(punkt.join("english.pickle"), b"model").unwrap();
        std::fs::write(punkt.join("README"), b"docs").unwrap();

        let installer = ResourceInstaller::new(layout).unwrap();
        installer.provision_punkt_tab().await;

        let english = installer
            .layout()
            .data_dir()
            .join("tokenizers/punkt_tab/english");
        assert!(english.join("english.pickle").exists());
        assert!(!english.join("README").exists());
    }

    #[tokio::test]
    async fn test_punkt_tab_shim_tolerates_missing_sources() {
        let dir = TempDir::new().unwrap();
        let layout = test_layout(&dir);
        let installer = ResourceInstaller::new(layout).unwrap();

        // No punkt resources exist at all; the shim and its fallback both
        // fail but must not error out of the provisioning sequence
        installer.provision_punkt_tab().await;

        let english = installer
            .layout()
            .data_dir()
            .join("tokenizers/punkt_tab/english");
        assert!(english.is_dir());
    }
}
