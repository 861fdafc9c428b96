//! depstage - provisions the runtime dependencies of the serving stack
//!
//! Fetches the direct-download artifacts, the NLTK linguistic resources,
//! and the model hub snapshots into the working directory. Takes no
//! arguments; behavior is defined entirely by the built-in registries.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info};

use depstage_artifacts::{ArtifactFetcher, ARTIFACTS};
use depstage_hub::SnapshotFetcher;
use depstage_nltk::{DataLayout, ResourceInstaller};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        error!("provisioning failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let workdir = std::env::current_dir()?;

    // Step 1: direct-download artifacts into the working directory
    info!("Fetching {} direct-download artifacts", ARTIFACTS.len());
    let fetcher = ArtifactFetcher::new(workdir.clone())?;
    let bar = download_bar()?;
    let progress = bar.clone();
    fetcher
        .fetch_all(move |p| {
            progress.set_length(p.total_bytes);
            progress.set_position(p.bytes_downloaded);
            progress.set_message(p.filename);
        })
        .await?;
    bar.finish_and_clear();

    // Step 2: linguistic resources; must complete before the model snapshots
    let layout = DataLayout::standard(&workdir)?;
    info!(
        "Provisioning NLTK resources into {}",
        layout.data_dir().display()
    );
    let installer = ResourceInstaller::new(layout)?;
    installer.provision().await?;

    // Step 3: model hub snapshots
    let hub = SnapshotFetcher::new(workdir)?;
    hub.snapshot_all().await?;

    info!("All dependencies provisioned");
    Ok(())
}

fn download_bar() -> Result<ProgressBar> {
    let bar = ProgressBar::new(0);
    bar.set_style(ProgressStyle::with_template(
        "{bar:40.cyan/blue} {bytes}/{total_bytes} {msg}",
    )?);
    Ok(bar)
}
