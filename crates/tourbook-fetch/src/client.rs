use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
  #[error("request to {url} failed: {source}")]
  Http {
    url: String,
    #[source]
    source: reqwest::Error,
  },

  #[error("{url} answered {status}")]
  Status { url: String, status: reqwest::StatusCode },

  #[error("invalid JSON from {url}: {source}")]
  Decode {
    url: String,
    #[source]
    source: serde_json::Error,
  },
}

/// Cliente mínimo de la API de origen: GET + JSON.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
  http: reqwest::Client,
  base_url: String,
}

impl UpstreamClient {
  pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
    let base_url = base_url.into().trim_end_matches('/').to_string();
    let http = reqwest::Client::builder()
      .timeout(timeout)
      .build()
      .map_err(|source| ClientError::Http { url: base_url.clone(), source })?;

    Ok(Self { http, base_url })
  }

  /// `GET {base_url}/{endpoint}` decodificado como `T`.
  ///
  /// El cuerpo se lee completo antes de decodificar para distinguir fallos de
  /// red de JSON inválido.
  pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ClientError> {
    let url = format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'));
    tracing::debug!(%url, "fetching upstream collection");

    let response = self
      .http
      .get(&url)
      .send()
      .await
      .map_err(|source| ClientError::Http { url: url.clone(), source })?;

    let status = response.status();
    if !status.is_success() {
      return Err(ClientError::Status { url, status });
    }

    let body = response.bytes().await.map_err(|source| ClientError::Http { url: url.clone(), source })?;

    serde_json::from_slice(&body).map_err(|source| ClientError::Decode { url, source })
  }
}
