use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identificador numérico de un artista.
///
/// Es el mismo número que publica la API de origen. Los registros anexos
/// (ubicaciones, fechas, relaciones) lo usan como clave foránea, sin garantía
/// de que exista un artista con ese id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistId(u32);

impl ArtistId {
  pub const fn new(value: u32) -> Self {
    ArtistId(value)
  }

  /// Devuelve el valor numérico interno.
  pub const fn get(&self) -> u32 {
    self.0
  }
}

impl From<u32> for ArtistId {
  fn from(value: u32) -> Self {
    ArtistId(value)
  }
}

impl From<ArtistId> for u32 {
  fn from(id: ArtistId) -> Self {
    id.0
  }
}

impl fmt::Display for ArtistId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// El texto recibido no es un id de artista válido (no numérico, negativo o
/// fuera de rango).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid artist id {input:?}: {source}")]
pub struct ParseArtistIdError {
  input: String,
  source: ParseIntError,
}

impl ParseArtistIdError {
  pub fn input(&self) -> &str {
    &self.input
  }
}

impl FromStr for ArtistId {
  type Err = ParseArtistIdError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    s.parse::<u32>()
      .map(ArtistId)
      .map_err(|source| ParseArtistIdError { input: s.to_owned(), source })
  }
}
