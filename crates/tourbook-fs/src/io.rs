use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::Path;

/// Escribe `contents` en `path` de forma atómica: primero a un `.tmp` hermano,
/// `fsync`, y luego `rename` encima del destino. Un lector concurrente ve el
/// fichero viejo o el nuevo, nunca uno a medias.
///
/// Crea el directorio padre si no existe.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  atomic_write(path, contents.as_bytes())
}

pub fn atomic_write(path: &Path, contents: &[u8]) -> io::Result<()> {
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    fs::create_dir_all(parent)?;
  }

  let tmp_path = path.with_extension("tmp");

  {
    let mut tmp_file = fs::File::create(&tmp_path)?;
    tmp_file.write_all(contents)?;
    tmp_file.sync_all()?;
  }

  fs::rename(&tmp_path, path)?;
  tracing::debug!(path = %path.display(), bytes = contents.len(), "atomic write");
  Ok(())
}

/// Lee un fichero de texto; `Ok(None)` si no existe.
pub fn read_optional(path: &Path) -> io::Result<Option<String>> {
  match fs::read_to_string(path) {
    Ok(content) => Ok(Some(content)),
    Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
    Err(e) => Err(e),
  }
}
