//! Snapshot retrieval through the hub mirror

use std::path::PathBuf;

use hf_hub::api::tokio::{Api, ApiBuilder};
use tokio::fs;
use tracing::{debug, info};

use crate::error::HubError;
use crate::registry::{HF_MIRROR_ENDPOINT, HUB_TREE, MODEL_REPOS};

/// Downloads full repository snapshots into a local directory tree
pub struct SnapshotFetcher {
    /// Root the `huggingface.co/` tree is created under
    root: PathBuf,
    /// Hub API client, pointed at the mirror
    api: Api,
}

impl SnapshotFetcher {
    /// Create a fetcher rooted at the given directory, talking to the mirror
    pub fn new(root: PathBuf) -> Result<Self, HubError> {
        let api = ApiBuilder::new()
            .with_endpoint(HF_MIRROR_ENDPOINT.to_string())
            .build()?;
        Ok(Self { root, api })
    }

    /// Local snapshot directory for a repository identifier
    pub fn local_dir(&self, repo_id: &str) -> PathBuf {
        self.root.join(HUB_TREE).join(repo_id)
    }

    /// Materialize the full current snapshot of a repository.
    ///
    /// Files already present locally are kept as-is, so re-runs only fetch
    /// what is missing. Downloads go through the hub cache and are copied
    /// out as real files, never symlinks. Model weights are not
    /// checksum-verified.
    pub async fn snapshot(&self, repo_id: &str) -> Result<PathBuf, HubError> {
        let local_dir = self.local_dir(repo_id);
        fs::create_dir_all(&local_dir).await?;

        let repo = self.api.model(repo_id.to_string());
        let repo_info = repo.info().await?;

        for sibling in repo_info.siblings {
            let dest = local_dir.join(&sibling.rfilename);
            if dest.exists() {
                debug!("{}/{} already present", repo_id, sibling.rfilename);
                continue;
            }

            let cached = repo.get(&sibling.rfilename).await?;
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent).await?;
            }
            fs::copy(&cached, &dest).await?;
            debug!("Materialized {}/{}", repo_id, sibling.rfilename);
        }

        Ok(local_dir)
    }

    /// Snapshot every repository in the registry, in order. The first
    /// failure aborts.
    pub async fn snapshot_all(&self) -> Result<(), HubError> {
        for repo_id in MODEL_REPOS {
            info!("Downloading hub repository {}", repo_id);
            let local_dir = self.snapshot(repo_id).await?;
            info!("Repository {} available at {}", repo_id, local_dir.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_dir_derivation() {
        let fetcher = SnapshotFetcher::new(PathBuf::from("/work")).unwrap();
        assert_eq!(
            fetcher.local_dir("OrgA/ModelB"),
            PathBuf::from("/work/huggingface.co/OrgA/ModelB")
        );
    }
}
