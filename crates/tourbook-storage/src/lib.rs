pub mod collection;
pub mod config;

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use tourbook_core::domain::{Artist, DateRecord, Indexed, LocationRecord, RelationRecord};
use tourbook_core::ports::{CatalogSource, SnapshotWriter, SourceError, WriteError};

pub use crate::collection::Collection;
pub use crate::config::StorageConfig;

/// Snapshots del catálogo como ficheros JSON, uno por colección.
///
/// No hay caché: cada `load_*` vuelve a leer y decodificar el fichero, así
/// que un refresco se ve en la siguiente petición sin reiniciar.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
  dir: PathBuf,
}

impl JsonSnapshotStore {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  pub fn dir(&self) -> &Path {
    &self.dir
  }

  pub fn path_for(&self, collection: Collection) -> PathBuf {
    self.dir.join(collection.file_name())
  }

  /// `true` si existen los cuatro ficheros.
  pub fn is_complete(&self) -> bool {
    Collection::ALL.iter().all(|c| self.path_for(*c).is_file())
  }

  fn read<T: DeserializeOwned>(&self, collection: Collection) -> Result<T, SourceError> {
    let path = self.path_for(collection);
    let content = tourbook_fs::read_optional(&path)
      .map_err(|e| SourceError::Io(format!("{}: {e}", path.display())))?
      .ok_or_else(|| SourceError::Missing(path.display().to_string()))?;

    serde_json::from_str(&content)
      .map_err(|e| SourceError::Decode { collection: collection.name(), message: e.to_string() })
  }

  fn write<T: Serialize + ?Sized>(&self, collection: Collection, value: &T) -> Result<(), WriteError> {
    let json = serde_json::to_string(value).map_err(|e| WriteError::Encode(e.to_string()))?;
    let path = self.path_for(collection);

    tourbook_fs::atomic_write_str(&path, &json)
      .map_err(|e| WriteError::Io(format!("{}: {e}", path.display())))?;

    tracing::debug!(%collection, path = %path.display(), "snapshot written");
    Ok(())
  }
}

impl CatalogSource for JsonSnapshotStore {
  fn load_artists(&self) -> Result<Vec<Artist>, SourceError> {
    self.read(Collection::Artists)
  }

  fn load_locations(&self) -> Result<Indexed<LocationRecord>, SourceError> {
    self.read(Collection::Locations)
  }

  fn load_dates(&self) -> Result<Indexed<DateRecord>, SourceError> {
    self.read(Collection::Dates)
  }

  fn load_relations(&self) -> Result<Indexed<RelationRecord>, SourceError> {
    self.read(Collection::Relations)
  }
}

impl SnapshotWriter for JsonSnapshotStore {
  fn save_artists(&self, artists: &[Artist]) -> Result<(), WriteError> {
    self.write(Collection::Artists, artists)
  }

  fn save_locations(&self, locations: &Indexed<LocationRecord>) -> Result<(), WriteError> {
    self.write(Collection::Locations, locations)
  }

  fn save_dates(&self, dates: &Indexed<DateRecord>) -> Result<(), WriteError> {
    self.write(Collection::Dates, dates)
  }

  fn save_relations(&self, relations: &Indexed<RelationRecord>) -> Result<(), WriteError> {
    self.write(Collection::Relations, relations)
  }
}

#[cfg(test)]
mod tests {
  use std::collections::BTreeMap;

  use tempfile::tempdir;
  use tourbook_core::CoreError;
  use tourbook_core::domain::ArtistId;
  use tourbook_core::services::CatalogService;

  use super::*;

  #[test]
  fn written_snapshots_read_back_through_the_catalog_service() {
    let tmp = tempdir().unwrap();
    let store = JsonSnapshotStore::new(tmp.path().join("snapshots"));

    let mut relation = BTreeMap::new();
    relation.insert("osaka-japan".to_string(), vec!["28-01-2020".to_string()]);

    store.save_artists(&[Artist::new(1, "Queen"), Artist::new(2, "SOJA")]).unwrap();
    store.save_locations(&Indexed::new(vec![LocationRecord::new(2, vec!["osaka-japan".into()])])).unwrap();
    store.save_dates(&Indexed::new(vec![DateRecord::new(1, vec!["*28-01-2020".into()])])).unwrap();
    store.save_relations(&Indexed::new(vec![RelationRecord::new(2, relation)])).unwrap();
    assert!(store.is_complete());

    let service = CatalogService::new(store);

    let locations = service.locations().unwrap();
    assert_eq!(locations.index[0].name, "SOJA");

    let dates = service.artist_dates(ArtistId::new(1)).unwrap().unwrap();
    assert_eq!(dates.payload, vec!["*28-01-2020"]);
  }

  #[test]
  fn joined_names_are_not_persisted() {
    let tmp = tempdir().unwrap();
    let store = JsonSnapshotStore::new(tmp.path());

    let mut record = LocationRecord::new(1, vec!["lima-peru".into()]);
    record.name = "Queen".into();
    store.save_locations(&Indexed::new(vec![record])).unwrap();

    let reloaded = store.load_locations().unwrap();
    assert_eq!(reloaded.index[0].name, "");
  }

  #[test]
  fn missing_snapshot_is_data_unavailable() {
    let tmp = tempdir().unwrap();
    let store = JsonSnapshotStore::new(tmp.path());

    assert!(matches!(store.load_artists(), Err(SourceError::Missing(_))));
    assert!(!store.is_complete());

    let service = CatalogService::new(store);
    assert!(matches!(service.list_artists(), Err(CoreError::DataUnavailable(_))));
  }

  #[test]
  fn corrupt_snapshot_is_a_decode_error() {
    let tmp = tempdir().unwrap();
    let store = JsonSnapshotStore::new(tmp.path());
    std::fs::write(store.path_for(Collection::Dates), "{\"index\": [").unwrap();

    match store.load_dates() {
      Err(SourceError::Decode { collection, .. }) => assert_eq!(collection, "dates"),
      other => panic!("expected decode error, got {other:?}"),
    }
  }
}
