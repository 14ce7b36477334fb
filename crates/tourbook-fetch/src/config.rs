use tourbook_config::{CONFIG_BACKEND, ConfigError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FetchConfig {
  /// URL base de la API de origen (sin `/` final).
  #[serde(default = "default_base_url")]
  pub base_url: String,

  /// Timeout por petición, en segundos.
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,

  /// Descargar y reescribir los snapshots al arrancar el servidor.
  #[serde(default = "default_refresh_on_startup")]
  pub refresh_on_startup: bool,
}

fn default_base_url() -> String {
  "https://groupietrackers.herokuapp.com/api".into()
}

fn default_timeout_secs() -> u64 {
  30
}

fn default_refresh_on_startup() -> bool {
  true
}

impl Default for FetchConfig {
  fn default() -> Self {
    FetchConfig {
      base_url: default_base_url(),
      timeout_secs: default_timeout_secs(),
      refresh_on_startup: default_refresh_on_startup(),
    }
  }
}

impl FetchConfig {
  pub fn load() -> Result<Self, ConfigError> {
    CONFIG_BACKEND.load_or_init_section("fetch")
  }
}
