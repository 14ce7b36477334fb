//! Router assembly and the listening loop.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::infrastructure::shutdown::shutdown_signal;
use crate::state::{AppState, SharedSource};

/// Preflight cache lifetime.
const CORS_MAX_AGE: Duration = Duration::from_secs(12 * 3600);

pub struct Server {
  config: ServerConfig,
  source: SharedSource,
}

impl Server {
  pub fn new(config: ServerConfig, source: SharedSource) -> Self {
    Self { config, source }
  }

  /// Builds the full router: routes, static files, CORS and request tracing.
  pub fn router(&self) -> Router {
    let state = Arc::new(AppState::new(Arc::clone(&self.source)));

    Router::new()
      .route("/health", get(health))
      .merge(crate::routes::routes())
      .nest_service("/static", ServeDir::new(&self.config.static_dir))
      .fallback(fallback)
      .layer(build_cors_layer(&self.config.allowed_origins))
      .layer(TraceLayer::new_for_http())
      .with_state(state)
  }

  /// Binds the configured address and serves until a shutdown signal arrives.
  pub async fn serve(&self) -> anyhow::Result<()> {
    let addr = self.config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
      .await
      .map_err(|e| anyhow::anyhow!("failed to bind to {addr}: {e}"))?;

    tracing::info!(%addr, "Server is running on http://localhost:{}", self.config.port);

    axum::serve(listener, self.router()).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("server stopped");
    Ok(())
  }
}

async fn health() -> impl IntoResponse {
  "OK"
}

async fn fallback() -> ApiError {
  ApiError::not_found("Not found")
}

fn build_cors_base() -> CorsLayer {
  CorsLayer::new()
    .allow_methods([
      Method::GET,
      Method::POST,
      Method::PUT,
      Method::PATCH,
      Method::DELETE,
      Method::OPTIONS,
    ])
    .allow_headers([
      header::ORIGIN,
      header::CONTENT_TYPE,
      header::ACCEPT,
      header::AUTHORIZATION,
      HeaderName::from_static("x-requested-with"),
    ])
    .expose_headers([header::CONTENT_LENGTH])
    .max_age(CORS_MAX_AGE)
}

/// `["*"]` allows any origin (without credentials, which browsers reject with a
/// wildcard); an explicit list allows credentials; empty or all-invalid
/// disables cross-origin access.
pub fn build_cors_layer(origins: &[String]) -> CorsLayer {
  let cors = build_cors_base();

  if origins.is_empty() {
    return cors;
  }

  if origins.len() == 1 && origins[0] == "*" {
    return cors.allow_origin(Any);
  }

  if origins.iter().any(|origin| origin == "*") {
    tracing::error!(?origins, "invalid CORS config: '*' must be the only allowed origin");
    return cors;
  }

  let allowed: Vec<HeaderValue> = origins
    .iter()
    .filter_map(|origin| match HeaderValue::from_str(origin) {
      Ok(value) => Some(value),
      Err(_) => {
        tracing::error!(%origin, "invalid CORS origin; expected a valid header value");
        None
      }
    })
    .collect();

  if allowed.is_empty() {
    tracing::warn!("all configured CORS origins were invalid; disabling CORS");
    return cors;
  }

  tracing::info!(?origins, "CORS configured");
  cors.allow_origin(AllowOrigin::list(allowed)).allow_credentials(true)
}
