//! HTML pages.
//!
//! - `GET /artist/locations/:id`, `/artist/dates/:id`, `/artist/relations/:id`
//! - `GET /search?query=...` - artist list filtered by name

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use tourbook_core::domain::ArtistId;

use crate::error::{ApiError, PageError};
use crate::render;
use crate::state::AppState;

type PageResult = Result<Html<String>, PageError>;

pub fn routes() -> Router<Arc<AppState>> {
  Router::new()
    .route("/artist/locations/:id", get(artist_locations))
    .route("/artist/dates/:id", get(artist_dates))
    .route("/artist/relations/:id", get(artist_relations))
    .route("/search", get(search))
}

/// `?query=` is optional; absent means match everything.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
  #[serde(default)]
  pub query: String,
}

async fn artist_locations(State(state): State<Arc<AppState>>, Path(raw_id): Path<String>) -> PageResult {
  let id: ArtistId = raw_id.parse()?;
  let projection = state
    .read(move |catalog| catalog.artist_locations(id))
    .await?
    .ok_or_else(|| not_found(id, "locations"))?;

  Ok(Html(render::locations_page(&projection)))
}

async fn artist_dates(State(state): State<Arc<AppState>>, Path(raw_id): Path<String>) -> PageResult {
  let id: ArtistId = raw_id.parse()?;
  let projection = state
    .read(move |catalog| catalog.artist_dates(id))
    .await?
    .ok_or_else(|| not_found(id, "dates"))?;

  Ok(Html(render::dates_page(&projection)))
}

async fn artist_relations(State(state): State<Arc<AppState>>, Path(raw_id): Path<String>) -> PageResult {
  let id: ArtistId = raw_id.parse()?;
  let projection = state
    .read(move |catalog| catalog.artist_relations(id))
    .await?
    .ok_or_else(|| not_found(id, "relations"))?;

  Ok(Html(render::relations_page(&projection)))
}

async fn search(State(state): State<Arc<AppState>>, Query(params): Query<SearchParams>) -> PageResult {
  let query = params.query;
  let needle = query.clone();
  let artists = state.read(move |catalog| catalog.search_artists(&needle)).await?;

  Ok(Html(render::artists_page(&query, &artists)))
}

fn not_found(id: ArtistId, what: &str) -> PageError {
  tracing::debug!(%id, what, "no projection for artist");
  ApiError::not_found(format!("No {what} found for artist {id}")).into_page()
}
