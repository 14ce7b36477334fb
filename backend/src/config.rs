use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tourbook_config::{CONFIG_BACKEND, ConfigError};

/// Environment variable that overrides `[server] port`.
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
  /// Human-readable multi-line output for local development.
  #[default]
  Pretty,
  /// One JSON object per line.
  Json,
}

/// `[server]` section of `tourbook.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host: IpAddr,

  #[serde(default = "default_port")]
  pub port: u16,

  /// Origins allowed by CORS. A single `"*"` allows any origin; empty disables CORS.
  #[serde(default = "default_allowed_origins")]
  pub allowed_origins: Vec<String>,

  /// Directory served under `/static`.
  #[serde(default = "default_static_dir")]
  pub static_dir: PathBuf,

  #[serde(default)]
  pub log_format: LogFormat,
}

fn default_host() -> IpAddr {
  IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
  8080
}

fn default_allowed_origins() -> Vec<String> {
  ["http://localhost:3000", "http://localhost:5173", "http://localhost:4173", "http://localhost"]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_static_dir() -> PathBuf {
  PathBuf::from("./static")
}

impl Default for ServerConfig {
  fn default() -> Self {
    ServerConfig {
      host: default_host(),
      port: default_port(),
      allowed_origins: default_allowed_origins(),
      static_dir: default_static_dir(),
      log_format: LogFormat::default(),
    }
  }
}

impl ServerConfig {
  /// Loads `[server]` (writing defaults back on first run), then applies `$PORT`.
  pub fn load() -> Result<Self, ConfigError> {
    let cfg: ServerConfig = CONFIG_BACKEND.load_or_init_section("server")?;
    cfg.with_env_overrides(std::env::var(PORT_ENV).ok().as_deref())
  }

  fn with_env_overrides(mut self, port: Option<&str>) -> Result<Self, ConfigError> {
    if let Some(raw) = port {
      self.port = raw
        .parse()
        .map_err(|e| ConfigError::Other(format!("invalid ${PORT_ENV} value {raw:?}: {e}")))?;
    }
    Ok(self)
  }

  pub fn socket_addr(&self) -> SocketAddr {
    SocketAddr::new(self.host, self.port)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_match_the_local_dev_setup() {
    let cfg = ServerConfig::default();

    assert_eq!(cfg.socket_addr().port(), 8080);
    assert!(cfg.allowed_origins.contains(&"http://localhost:5173".to_string()));
    assert_eq!(cfg.log_format, LogFormat::Pretty);
  }

  #[test]
  fn port_override_wins_and_is_validated() {
    let cfg = ServerConfig::default().with_env_overrides(Some("9090")).unwrap();
    assert_eq!(cfg.port, 9090);

    let err = ServerConfig::default().with_env_overrides(Some("http")).unwrap_err();
    assert!(err.to_string().contains("$PORT"));
  }

  #[test]
  fn partial_section_fills_in_defaults() {
    let cfg: ServerConfig = toml::from_str("port = 3000\nlog_format = \"json\"\n").unwrap();

    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.log_format, LogFormat::Json);
    assert_eq!(cfg.static_dir, PathBuf::from("./static"));
  }
}
