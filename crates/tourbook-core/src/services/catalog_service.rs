use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{Artist, ArtistId, DateRecord, Indexed, LocationRecord, RelationRecord};
use crate::errors::CoreError;
use crate::ports::{CatalogSource, SourceError};
use crate::services::lookup::{find_artist, join_names, project_for_artist, search};

/// Datos de un artista concreto junto con su nombre, listos para mostrar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistProjection<P> {
  pub id: ArtistId,
  pub name: String,
  pub payload: P,
}

/// Servicio de lectura del catálogo.
///
/// Cada operación vuelve a cargar de la fuente solo las colecciones que
/// necesita y aplica encima las operaciones puras de [`crate::services::lookup`].
/// No guarda nada entre llamadas.
pub struct CatalogService<S>
where
  S: CatalogSource,
{
  source: S,
}

impl<S> CatalogService<S>
where
  S: CatalogSource,
{
  pub fn new(source: S) -> Self {
    Self { source }
  }

  // -------- artistas --------

  pub fn list_artists(&self) -> Result<Vec<Artist>, CoreError> {
    let artists = self.source.load_artists().map_err(unavailable)?;
    tracing::debug!(count = artists.len(), "artists loaded");
    Ok(artists)
  }

  pub fn get_artist(&self, id: ArtistId) -> Result<Option<Artist>, CoreError> {
    tracing::debug!(%id, "looking up artist");
    let artists = self.list_artists()?;
    Ok(find_artist(&artists, id).cloned())
  }

  pub fn search_artists(&self, query: &str) -> Result<Vec<Artist>, CoreError> {
    let artists = self.list_artists()?;
    let found = search(&artists, query);
    tracing::debug!(query, matches = found.len(), total = artists.len(), "artist search");
    Ok(found)
  }

  // -------- colecciones anexas con nombre --------

  pub fn locations(&self) -> Result<Indexed<LocationRecord>, CoreError> {
    let locations = self.source.load_locations().map_err(unavailable)?;
    let artists = self.list_artists()?;
    tracing::debug!(records = locations.len(), "joining locations with artist names");
    Ok(Indexed::new(join_names(locations.index, &artists)))
  }

  pub fn dates(&self) -> Result<Indexed<DateRecord>, CoreError> {
    let dates = self.source.load_dates().map_err(unavailable)?;
    let artists = self.list_artists()?;
    tracing::debug!(records = dates.len(), "joining dates with artist names");
    Ok(Indexed::new(join_names(dates.index, &artists)))
  }

  pub fn relations(&self) -> Result<Indexed<RelationRecord>, CoreError> {
    let relations = self.source.load_relations().map_err(unavailable)?;
    let artists = self.list_artists()?;
    tracing::debug!(records = relations.len(), "joining relations with artist names");
    Ok(Indexed::new(join_names(relations.index, &artists)))
  }

  // -------- proyecciones por artista --------

  /// Ubicaciones de un artista. `None` si no existe el artista o no tiene
  /// registro de ubicaciones.
  pub fn artist_locations(
    &self,
    id: ArtistId,
  ) -> Result<Option<ArtistProjection<Vec<String>>>, CoreError> {
    let Some(artist) = self.get_artist(id)? else {
      return Ok(None);
    };
    let locations = self.source.load_locations().map_err(unavailable)?;
    Ok(project(artist, &locations.index, "locations"))
  }

  pub fn artist_dates(&self, id: ArtistId) -> Result<Option<ArtistProjection<Vec<String>>>, CoreError> {
    let Some(artist) = self.get_artist(id)? else {
      return Ok(None);
    };
    let dates = self.source.load_dates().map_err(unavailable)?;
    Ok(project(artist, &dates.index, "dates"))
  }

  pub fn artist_relations(
    &self,
    id: ArtistId,
  ) -> Result<Option<ArtistProjection<BTreeMap<String, Vec<String>>>>, CoreError> {
    let Some(artist) = self.get_artist(id)? else {
      return Ok(None);
    };
    let relations = self.source.load_relations().map_err(unavailable)?;
    Ok(project(artist, &relations.index, "relations"))
  }
}

fn project<R>(artist: Artist, records: &[R], collection: &str) -> Option<ArtistProjection<R::Payload>>
where
  R: crate::domain::Annexed,
  R::Payload: Clone,
{
  let payload = project_for_artist(artist.id, records).cloned();
  tracing::debug!(id = %artist.id, collection, found = payload.is_some(), "artist projection");
  let payload = payload?;
  Some(ArtistProjection { id: artist.id, name: artist.name, payload })
}

fn unavailable(err: SourceError) -> CoreError {
  CoreError::DataUnavailable(err.to_string())
}
