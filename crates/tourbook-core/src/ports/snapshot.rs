use crate::domain::{Artist, DateRecord, Indexed, LocationRecord, RelationRecord};

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
  #[error("io error: {0}")]
  Io(String),
  #[error("encode error: {0}")]
  Encode(String),
}

/// Port de escritura de snapshots: persiste cada colección tal cual llega de
/// la adquisición.
pub trait SnapshotWriter {
  fn save_artists(&self, artists: &[Artist]) -> Result<(), WriteError>;
  fn save_locations(&self, locations: &Indexed<LocationRecord>) -> Result<(), WriteError>;
  fn save_dates(&self, dates: &Indexed<DateRecord>) -> Result<(), WriteError>;
  fn save_relations(&self, relations: &Indexed<RelationRecord>) -> Result<(), WriteError>;
}
