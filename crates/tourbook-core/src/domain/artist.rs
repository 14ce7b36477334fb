use crate::domain::ids::ArtistId;
use serde::{Deserialize, Serialize};

/// Representa a un artista (o banda) del catálogo.
///
/// Es la única colección que aporta nombres: los registros anexos solo
/// conocen el `id` y reciben el nombre al hacer el join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
  /// Identificador único del artista.
  pub id: ArtistId,

  /// Nombre para mostrar.
  pub name: String,

  /// URL de la imagen del artista.
  #[serde(default)]
  pub image: String,

  /// Miembros, en el orden publicado por la fuente.
  #[serde(default)]
  pub members: Vec<String>,

  /// Año de creación.
  #[serde(default)]
  pub creation_date: i32,

  /// Fecha del primer álbum, tal cual la publica la fuente (`dd-mm-yyyy`).
  #[serde(default)]
  pub first_album: String,

  /// URLs de los recursos anexos en la API de origen.
  #[serde(default)]
  pub locations: String,
  #[serde(default)]
  pub concert_dates: String,
  #[serde(default)]
  pub relations: String,
}

impl Artist {
  /// Artista mínimo: solo id y nombre, el resto vacío.
  pub fn new(id: u32, name: impl Into<String>) -> Self {
    Artist {
      id: ArtistId::new(id),
      name: name.into(),
      image: String::new(),
      members: Vec::new(),
      creation_date: 0,
      first_album: String::new(),
      locations: String::new(),
      concert_dates: String::new(),
      relations: String::new(),
    }
  }
}
