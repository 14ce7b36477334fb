use std::sync::Arc;

use tourbook_core::CoreError;
use tourbook_core::ports::CatalogSource;
use tourbook_core::services::CatalogService;

use crate::error::ApiResult;

/// Catalog source shared by every request.
pub type SharedSource = Arc<dyn CatalogSource + Send + Sync>;

/// Shared application state.
pub struct AppState {
  catalog: CatalogService<SharedSource>,
}

impl AppState {
  pub fn new(source: SharedSource) -> Self {
    Self { catalog: CatalogService::new(source) }
  }

  /// Runs a catalog read on the blocking pool.
  ///
  /// Snapshot reads are synchronous file I/O plus JSON decoding, so they stay
  /// off the async workers.
  pub async fn read<T, F>(self: &Arc<Self>, op: F) -> ApiResult<T>
  where
    F: FnOnce(&CatalogService<SharedSource>) -> Result<T, CoreError> + Send + 'static,
    T: Send + 'static,
  {
    let state = Arc::clone(self);
    let result = tokio::task::spawn_blocking(move || op(&state.catalog)).await?;
    Ok(result?)
  }
}
