//! Artifact download manager

use std::path::PathBuf;
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::error::ArtifactError;
use crate::registry::{self, ArtifactInfo, ARTIFACTS};

/// Download progress information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadProgress {
    /// Destination filename being downloaded
    pub filename: String,
    /// Bytes downloaded so far
    pub bytes_downloaded: u64,
    /// Total bytes to download
    pub total_bytes: u64,
    /// Progress fraction (0.0 - 1.0)
    pub fraction: f64,
}

/// Direct URL artifact fetcher
pub struct ArtifactFetcher {
    /// Destination directory; the working directory in production
    dest_dir: PathBuf,
    /// HTTP client
    client: reqwest::Client,
}

impl ArtifactFetcher {
    /// Create a fetcher writing into the given directory
    pub fn new(dest_dir: PathBuf) -> Result<Self, ArtifactError> {
        Ok(Self {
            dest_dir,
            client: reqwest::Client::builder()
                .user_agent("depstage/0.1.0")
                .build()
                .map_err(|e| ArtifactError::DownloadFailed(e.to_string()))?,
        })
    }

    /// Get the path where an artifact would be stored
    pub fn artifact_path(&self, artifact: &ArtifactInfo) -> PathBuf {
        self.dest_dir.join(artifact.filename())
    }

    /// Check if an artifact is downloaded
    pub async fn is_downloaded(&self, artifact: &ArtifactInfo) -> bool {
        self.artifact_path(artifact).exists()
    }

    /// Download an artifact with progress callback.
    ///
    /// A file already present at the destination is kept as-is and no
    /// request is made, so re-runs are idempotent.
    pub async fn fetch<F>(
        &self,
        artifact: &ArtifactInfo,
        progress_callback: F,
    ) -> Result<PathBuf, ArtifactError>
    where
        F: Fn(DownloadProgress) + Send + 'static,
    {
        let dest_path = self.artifact_path(artifact);

        if dest_path.exists() {
            info!("Artifact {} already downloaded", artifact.filename());
            return Ok(dest_path);
        }

        info!("Downloading artifact: {} from {}", artifact.id, artifact.url);

        fs::create_dir_all(&self.dest_dir).await?;

        let response = self
            .client
            .get(&artifact.url)
            .send()
            .await
            .map_err(|e| ArtifactError::DownloadFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ArtifactError::DownloadFailed(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        let total_size = response.content_length().unwrap_or(artifact.size_bytes);

        // Stream into a temp file so a partial transfer never counts as done
        let temp_path = dest_path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path).await?;

        let mut downloaded: u64 = 0;
        let mut stream = response.bytes_stream();

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result
                .map_err(|e| ArtifactError::DownloadFailed(e.to_string()))?;

            file.write_all(&chunk).await?;
            downloaded += chunk.len() as u64;

            progress_callback(DownloadProgress {
                filename: artifact.filename(),
                bytes_downloaded: downloaded,
                total_bytes: total_size,
                fraction: downloaded as f64 / total_size as f64,
            });
        }

        file.flush().await?;
        drop(file);

        // Verify download if SHA256 is provided
        if !artifact.sha256.is_empty() {
            debug!("Verifying artifact checksum...");
            let actual_hash = self.compute_sha256(&temp_path).await?;
            if actual_hash != artifact.sha256 {
                fs::remove_file(&temp_path).await?;
                return Err(ArtifactError::VerificationFailed {
                    expected: artifact.sha256.clone(),
                    actual: actual_hash,
                });
            }
        }

        // Move temp file to final location
        fs::rename(&temp_path, &dest_path).await?;

        info!("Artifact {} downloaded successfully", artifact.filename());
        Ok(dest_path)
    }

    /// Download an artifact by ID
    pub async fn fetch_by_id<F>(
        &self,
        artifact_id: &str,
        progress_callback: F,
    ) -> Result<PathBuf, ArtifactError>
    where
        F: Fn(DownloadProgress) + Send + 'static,
    {
        let artifact = registry::get_artifact(artifact_id)
            .ok_or_else(|| ArtifactError::ArtifactNotFound(artifact_id.to_string()))?;

        self.fetch(&artifact, progress_callback).await
    }

    /// Download every registry artifact, in order. The first failure aborts.
    pub async fn fetch_all<F>(&self, progress_callback: F) -> Result<Vec<PathBuf>, ArtifactError>
    where
        F: Fn(DownloadProgress) + Clone + Send + 'static,
    {
        let mut paths = Vec::new();

        for artifact in ARTIFACTS.iter() {
            paths.push(self.fetch(artifact, progress_callback.clone()).await?);
        }

        Ok(paths)
    }

    /// Compute SHA256 hash of a file
    async fn compute_sha256(&self, path: &PathBuf) -> Result<String, ArtifactError> {
        let data = fs::read(path).await?;
        let mut hasher = Sha256::new();
        hasher.update(&data);
        Ok(hex::encode(hasher.finalize()))
    }
}
