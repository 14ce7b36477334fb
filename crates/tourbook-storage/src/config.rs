use tourbook_config::{CONFIG_BACKEND, ConfigError, PATHS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StorageConfig {
  /// Directorio donde viven `artists.json`, `locations.json`, etc.
  #[serde(default = "default_snapshot_dir")]
  pub snapshot_dir: PathBuf,
}

fn default_snapshot_dir() -> PathBuf {
  PATHS.data_dir.join("snapshots")
}

impl Default for StorageConfig {
  fn default() -> Self {
    StorageConfig { snapshot_dir: default_snapshot_dir() }
  }
}

impl StorageConfig {
  pub fn load() -> Result<Self, ConfigError> {
    CONFIG_BACKEND.load_or_init_section("storage")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_section_uses_the_data_dir() {
    let cfg: StorageConfig = serde_json::from_str("{}").unwrap();

    assert_eq!(cfg.snapshot_dir, PATHS.data_dir.join("snapshots"));
  }

  #[test]
  fn explicit_snapshot_dir_is_kept() {
    let cfg: StorageConfig = serde_json::from_str(r#"{"snapshot_dir":"/srv/tourbook"}"#).unwrap();

    assert_eq!(cfg.snapshot_dir, PathBuf::from("/srv/tourbook"));
  }
}
