use crate::domain::{Artist, DateRecord, Indexed, LocationRecord, RelationRecord};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
  #[error("http error: {0}")]
  Http(String),

  #[error("unexpected status {status} from {url}")]
  Status { status: u16, url: String },

  #[error("decode error: {0}")]
  Decode(String),
}

/// Port que abstrae la descarga de las cuatro colecciones desde la fuente
/// externa.
///
/// Implementaciones posibles:
/// - HTTP contra la API pública (`tourbook-fetch`)
/// - fixtures en memoria para tests
#[async_trait::async_trait]
pub trait CatalogFetcher: Send + Sync {
  async fn fetch_artists(&self) -> Result<Vec<Artist>, FetchError>;
  async fn fetch_locations(&self) -> Result<Indexed<LocationRecord>, FetchError>;
  async fn fetch_dates(&self) -> Result<Indexed<DateRecord>, FetchError>;
  async fn fetch_relations(&self) -> Result<Indexed<RelationRecord>, FetchError>;
}
