use crate::paths::{ConfigError, TourbookPaths};
use serde::Serialize;
use serde::de::DeserializeOwned;

// La escritura pasa por toml_edit para conservar comentarios del usuario.
use toml_edit::{DocumentMut, Item};

pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

pub struct TomlConfigBackend {
  paths: TourbookPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: TourbookPaths) -> Self {
    Self { paths }
  }

  pub fn paths(&self) -> &TourbookPaths {
    &self.paths
  }

  /// Como [`ConfigBackend::load_section`], pero un fichero o una sección
  /// ausentes devuelven `T::default()`.
  pub fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    let path = self.paths.config_file();
    let Some(content) = tourbook_fs::read_optional(&path)? else {
      return Ok(T::default());
    };

    let toml_val: toml::Value = toml::from_str(&content)?;

    let Some(table) = toml_val.get(section) else {
      return Ok(T::default());
    };

    decode_section(section, table)
  }

  /// Carga la sección con defaults y la vuelve a escribir, de modo que el
  /// fichero siempre refleja los valores efectivos.
  pub fn load_or_init_section<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Serialize + Default,
  {
    let cfg = self.load_section_with_default(section)?;
    self.save_section(section, &cfg)?;
    Ok(cfg)
  }
}

fn decode_section<T: DeserializeOwned>(section: &str, table: &toml::Value) -> Result<T, ConfigError> {
  table
    .clone()
    .try_into()
    .map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = self.paths.config_file();
    let content = std::fs::read_to_string(&path)?;
    let toml_val: toml::Value = toml::from_str(&content)?;

    let table = toml_val
      .get(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {:?}", path)))?;

    decode_section(section, table)
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    // 1) Documento actual, o uno vacío si todavía no hay fichero.
    let mut doc: DocumentMut = match tourbook_fs::read_optional(&path)? {
      Some(content) => content
        .parse::<DocumentMut>()
        .map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?,
      None => DocumentMut::new(),
    };

    // 2) La sección se serializa sola con `toml` ("foo = 1\nbar = 2\n", sin cabecera)
    //    y se vuelve a parsear como tabla.
    let section_str = toml::to_string(value)
      .map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;

    let section_item: Item = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?
      .into_item();

    // 3) Reemplazar solo esa sección; el resto del documento queda intacto.
    doc[section] = section_item;

    tourbook_fs::atomic_write_str(&path, &doc.to_string())?;
    tracing::debug!(section, path = %path.display(), "config section saved");

    Ok(())
  }
}
