use crate::domain::{Artist, DateRecord, Indexed, LocationRecord, RelationRecord};
use crate::ports::{CatalogSource, SourceError};

/// Catálogo en memoria.
///
/// Sirve para tests y para embeber el núcleo sin ficheros: cada lectura
/// entrega un clon, igual que si se decodificara de nuevo.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
  pub artists: Vec<Artist>,
  pub locations: Indexed<LocationRecord>,
  pub dates: Indexed<DateRecord>,
  pub relations: Indexed<RelationRecord>,
}

impl MemoryCatalog {
  pub fn new(artists: Vec<Artist>) -> Self {
    Self { artists, ..Self::default() }
  }

  pub fn with_locations(mut self, locations: Vec<LocationRecord>) -> Self {
    self.locations = Indexed::new(locations);
    self
  }

  pub fn with_dates(mut self, dates: Vec<DateRecord>) -> Self {
    self.dates = Indexed::new(dates);
    self
  }

  pub fn with_relations(mut self, relations: Vec<RelationRecord>) -> Self {
    self.relations = Indexed::new(relations);
    self
  }
}

impl CatalogSource for MemoryCatalog {
  fn load_artists(&self) -> Result<Vec<Artist>, SourceError> {
    Ok(self.artists.clone())
  }

  fn load_locations(&self) -> Result<Indexed<LocationRecord>, SourceError> {
    Ok(self.locations.clone())
  }

  fn load_dates(&self) -> Result<Indexed<DateRecord>, SourceError> {
    Ok(self.dates.clone())
  }

  fn load_relations(&self) -> Result<Indexed<RelationRecord>, SourceError> {
    Ok(self.relations.clone())
  }
}
