// crates/tourbook-core/src/errors.rs
use thiserror::Error;

/// Error genérico del núcleo de Tourbook.
///
/// Las capas superiores (HTTP, CLI, etc.) deberían mapear este error
/// a respuestas o logs. "No encontrado" no es un error: las consultas
/// devuelven `Option`.
#[derive(Debug, Error)]
pub enum CoreError {
  /// La fuente no pudo entregar una colección (falta o está corrupta).
  #[error("data unavailable: {0}")]
  DataUnavailable(String),

  #[error("fetch error: {0}")]
  Fetch(String),

  #[error("snapshot error: {0}")]
  Snapshot(String),
}
