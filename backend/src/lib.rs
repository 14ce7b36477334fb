pub mod config;
pub mod error;
mod infrastructure;
pub mod render;
pub mod routes;
pub mod server;
pub mod state;

use std::sync::Arc;

use anyhow::Context;
use tourbook_core::services::SnapshotService;
use tourbook_fetch::{FetchConfig, HttpCatalogFetcher};
use tourbook_storage::{JsonSnapshotStore, StorageConfig};

use crate::config::ServerConfig;
use crate::server::Server;
use crate::state::SharedSource;

pub use infrastructure::logging::init_logging;

/// Loads configuration, refreshes the snapshots if configured to, and serves
/// until shutdown.
pub async fn run() -> anyhow::Result<()> {
  let server_config = ServerConfig::load().context("load [server] config")?;
  init_logging(server_config.log_format);

  let storage_config = StorageConfig::load().context("load [storage] config")?;
  let fetch_config = FetchConfig::load().context("load [fetch] config")?;

  // --- Dependency wiring ---

  // 1. Snapshot store: read by every request, written by the refresh step.
  let store = JsonSnapshotStore::new(storage_config.snapshot_dir);
  tracing::info!(dir = %store.dir().display(), "using snapshot directory");

  // 2. Acquisition: replace the snapshots with a fresh download.
  if fetch_config.refresh_on_startup {
    refresh_snapshots(&fetch_config, &store).await?;
  } else if !store.is_complete() {
    tracing::warn!("startup refresh disabled and snapshots are incomplete; catalog requests will fail");
  }

  // 3. HTTP layer.
  let source: SharedSource = Arc::new(store);
  Server::new(server_config, source).serve().await
}

/// Downloads the catalog into `store`. A failed download is fatal only when
/// there are no usable snapshots from a previous run.
async fn refresh_snapshots(config: &FetchConfig, store: &JsonSnapshotStore) -> anyhow::Result<()> {
  tracing::info!(base_url = %config.base_url, "refreshing catalog snapshots");

  let fetcher = HttpCatalogFetcher::from_config(config)?;
  let service = SnapshotService::new(fetcher, store.clone());

  match service.refresh().await {
    Ok(_) => Ok(()),
    Err(e) if store.is_complete() => {
      tracing::warn!(error = %e, "snapshot refresh failed; serving the previous snapshots");
      Ok(())
    }
    Err(e) => Err(e).context("refresh catalog snapshots"),
  }
}
