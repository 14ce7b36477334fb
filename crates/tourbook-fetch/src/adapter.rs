use std::time::Duration;

use async_trait::async_trait;

use tourbook_core::domain::{Artist, DateRecord, Indexed, LocationRecord, RelationRecord};
use tourbook_core::ports::fetcher::{CatalogFetcher, FetchError};

use crate::client::{ClientError, UpstreamClient};
use crate::config::FetchConfig;

/// Implementación de `CatalogFetcher` contra la API HTTP pública.
///
/// Los endpoints son los de la fuente: `artists`, `locations`, `dates` y
/// `relation` (en singular).
#[derive(Debug, Clone)]
pub struct HttpCatalogFetcher {
  client: UpstreamClient,
}

impl HttpCatalogFetcher {
  pub fn new(client: UpstreamClient) -> Self {
    Self { client }
  }

  pub fn from_config(cfg: &FetchConfig) -> Result<Self, FetchError> {
    let client = UpstreamClient::new(&cfg.base_url, Duration::from_secs(cfg.timeout_secs))
      .map_err(map_client_error)?;
    Ok(Self::new(client))
  }
}

#[async_trait]
impl CatalogFetcher for HttpCatalogFetcher {
  async fn fetch_artists(&self) -> Result<Vec<Artist>, FetchError> {
    self.client.get_json("artists").await.map_err(map_client_error)
  }

  async fn fetch_locations(&self) -> Result<Indexed<LocationRecord>, FetchError> {
    self.client.get_json("locations").await.map_err(map_client_error)
  }

  async fn fetch_dates(&self) -> Result<Indexed<DateRecord>, FetchError> {
    self.client.get_json("dates").await.map_err(map_client_error)
  }

  async fn fetch_relations(&self) -> Result<Indexed<RelationRecord>, FetchError> {
    self.client.get_json("relation").await.map_err(map_client_error)
  }
}

fn map_client_error(err: ClientError) -> FetchError {
  let message = err.to_string();
  match err {
    ClientError::Http { .. } => FetchError::Http(message),
    ClientError::Status { url, status } => FetchError::Status { status: status.as_u16(), url },
    ClientError::Decode { .. } => FetchError::Decode(message),
  }
}
