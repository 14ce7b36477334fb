use std::sync::Arc;

use crate::domain::{Artist, DateRecord, Indexed, LocationRecord, RelationRecord};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
  #[error("collection not available: {0}")]
  Missing(String),
  #[error("io error: {0}")]
  Io(String),
  #[error("decode error in {collection}: {message}")]
  Decode { collection: &'static str, message: String },
}

/// Port de lectura del catálogo (el "entity store").
///
/// Cada llamada devuelve una copia recién decodificada y propia del
/// llamador: no hay caché ni aliasing entre llamadas. Es bloqueante; desde
/// código async hay que llamarlo en un hilo de bloqueo.
pub trait CatalogSource {
  fn load_artists(&self) -> Result<Vec<Artist>, SourceError>;
  fn load_locations(&self) -> Result<Indexed<LocationRecord>, SourceError>;
  fn load_dates(&self) -> Result<Indexed<DateRecord>, SourceError>;
  fn load_relations(&self) -> Result<Indexed<RelationRecord>, SourceError>;
}

impl<T: CatalogSource + ?Sized> CatalogSource for &T {
  fn load_artists(&self) -> Result<Vec<Artist>, SourceError> {
    (**self).load_artists()
  }

  fn load_locations(&self) -> Result<Indexed<LocationRecord>, SourceError> {
    (**self).load_locations()
  }

  fn load_dates(&self) -> Result<Indexed<DateRecord>, SourceError> {
    (**self).load_dates()
  }

  fn load_relations(&self) -> Result<Indexed<RelationRecord>, SourceError> {
    (**self).load_relations()
  }
}

impl<T: CatalogSource + ?Sized> CatalogSource for Arc<T> {
  fn load_artists(&self) -> Result<Vec<Artist>, SourceError> {
    (**self).load_artists()
  }

  fn load_locations(&self) -> Result<Indexed<LocationRecord>, SourceError> {
    (**self).load_locations()
  }

  fn load_dates(&self) -> Result<Indexed<DateRecord>, SourceError> {
    (**self).load_dates()
  }

  fn load_relations(&self) -> Result<Indexed<RelationRecord>, SourceError> {
    (**self).load_relations()
  }
}
