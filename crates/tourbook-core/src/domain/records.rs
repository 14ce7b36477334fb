use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::ids::ArtistId;

/// Registro anexo: datos indexados por el id de un artista que no traen su
/// nombre.
///
/// El `name` es derivado. La fuente nunca lo rellena (se ignora al
/// deserializar) y solo lo asigna el join de nombres en cada lectura.
pub trait Annexed {
  /// Contenido propio del registro, el que se proyecta por artista.
  type Payload;

  fn artist_id(&self) -> ArtistId;
  fn name(&self) -> &str;
  fn set_name(&mut self, name: String);
  fn payload(&self) -> &Self::Payload;
}

/// Contenedor indexado tal como lo publica la fuente: `{ "index": [...] }`.
///
/// El orden de `index` es el de la adquisición y se respeta al mostrar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indexed<R> {
  pub index: Vec<R>,
}

impl<R> Indexed<R> {
  pub fn new(index: Vec<R>) -> Self {
    Self { index }
  }

  pub fn len(&self) -> usize {
    self.index.len()
  }

  pub fn is_empty(&self) -> bool {
    self.index.is_empty()
  }
}

impl<R> Default for Indexed<R> {
  fn default() -> Self {
    Self { index: Vec::new() }
  }
}

impl<R> From<Vec<R>> for Indexed<R> {
  fn from(index: Vec<R>) -> Self {
    Self { index }
  }
}

/// Ciudades donde actuó un artista.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
  pub id: ArtistId,
  #[serde(default, skip_deserializing)]
  pub name: String,
  pub locations: Vec<String>,
  /// URL del recurso de fechas asociado en la API de origen.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub dates: Option<String>,
}

/// Fechas de concierto de un artista.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRecord {
  pub id: ArtistId,
  #[serde(default, skip_deserializing)]
  pub name: String,
  pub dates: Vec<String>,
}

/// Relación ubicación → fechas de un artista.
///
/// Se usa `BTreeMap` para que el orden de las claves sea estable al
/// serializar y al renderizar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationRecord {
  pub id: ArtistId,
  #[serde(default, skip_deserializing)]
  pub name: String,
  pub dates_locations: BTreeMap<String, Vec<String>>,
}

impl LocationRecord {
  pub fn new(id: u32, locations: Vec<String>) -> Self {
    Self { id: ArtistId::new(id), name: String::new(), locations, dates: None }
  }
}

impl DateRecord {
  pub fn new(id: u32, dates: Vec<String>) -> Self {
    Self { id: ArtistId::new(id), name: String::new(), dates }
  }
}

impl RelationRecord {
  pub fn new(id: u32, dates_locations: BTreeMap<String, Vec<String>>) -> Self {
    Self { id: ArtistId::new(id), name: String::new(), dates_locations }
  }
}

macro_rules! impl_annexed {
  ($record:ty, $field:ident, $payload:ty) => {
    impl Annexed for $record {
      type Payload = $payload;

      fn artist_id(&self) -> ArtistId {
        self.id
      }

      fn name(&self) -> &str {
        &self.name
      }

      fn set_name(&mut self, name: String) {
        self.name = name;
      }

      fn payload(&self) -> &Self::Payload {
        &self.$field
      }
    }
  };
}

impl_annexed!(LocationRecord, locations, Vec<String>);
impl_annexed!(DateRecord, dates, Vec<String>);
impl_annexed!(RelationRecord, dates_locations, BTreeMap<String, Vec<String>>);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn name_in_source_is_ignored() {
    let json = r#"{"index": [{"id": 1, "name": "Impostor", "dates": ["*23-08-2019"]}]}"#;
    let decoded: Indexed<DateRecord> = serde_json::from_str(json).unwrap();

    assert_eq!(decoded.index[0].name, "");
    assert_eq!(decoded.index[0].dates, vec!["*23-08-2019"]);
  }

  #[test]
  fn relation_uses_camel_case_key() {
    let json = r#"{"index": [{"id": 2, "datesLocations": {"paris-france": ["01-02-2020"]}}]}"#;
    let decoded: Indexed<RelationRecord> = serde_json::from_str(json).unwrap();

    let record = &decoded.index[0];
    assert_eq!(record.payload()["paris-france"], vec!["01-02-2020"]);

    let encoded = serde_json::to_value(record).unwrap();
    assert_eq!(encoded["datesLocations"]["paris-france"][0], "01-02-2020");
    assert_eq!(encoded["name"], "");
  }

  #[test]
  fn location_keeps_upstream_dates_link() {
    let json = r#"{"index": [{"id": 1, "locations": ["tokyo-japan"], "dates": "https://example.com/api/dates/1"}]}"#;
    let decoded: Indexed<LocationRecord> = serde_json::from_str(json).unwrap();

    assert_eq!(decoded.index[0].dates.as_deref(), Some("https://example.com/api/dates/1"));
    assert_eq!(decoded.len(), 1);
  }
}
