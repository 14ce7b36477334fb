//! JSON endpoints.
//!
//! - `GET /` - `{"artists": [...]}`
//! - `GET /artists` - all artists
//! - `GET /artist/:id` - one artist
//! - `GET /locations`, `GET /dates`, `GET /relations` - annexed collections with artist names

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use tourbook_core::domain::{Artist, ArtistId, DateRecord, Indexed, LocationRecord, RelationRecord};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
  Router::new()
    .route("/", get(index))
    .route("/artists", get(list_artists))
    .route("/artist/:id", get(get_artist))
    .route("/locations", get(list_locations))
    .route("/dates", get(list_dates))
    .route("/relations", get(list_relations))
}

#[derive(Debug, Serialize)]
pub struct IndexResponse {
  pub artists: Vec<Artist>,
}

async fn index(State(state): State<Arc<AppState>>) -> ApiResult<Json<IndexResponse>> {
  let artists = state.read(|catalog| catalog.list_artists()).await?;
  Ok(Json(IndexResponse { artists }))
}

async fn list_artists(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Artist>>> {
  let artists = state.read(|catalog| catalog.list_artists()).await?;
  Ok(Json(artists))
}

async fn get_artist(
  State(state): State<Arc<AppState>>,
  Path(raw_id): Path<String>,
) -> ApiResult<Json<Artist>> {
  let id: ArtistId = raw_id.parse()?;

  state
    .read(move |catalog| catalog.get_artist(id))
    .await?
    .map(Json)
    .ok_or_else(ApiError::artist_not_found)
}

async fn list_locations(State(state): State<Arc<AppState>>) -> ApiResult<Json<Indexed<LocationRecord>>> {
  let locations = state.read(|catalog| catalog.locations()).await?;
  Ok(Json(locations))
}

async fn list_dates(State(state): State<Arc<AppState>>) -> ApiResult<Json<Indexed<DateRecord>>> {
  let dates = state.read(|catalog| catalog.dates()).await?;
  Ok(Json(dates))
}

async fn list_relations(State(state): State<Arc<AppState>>) -> ApiResult<Json<Indexed<RelationRecord>>> {
  let relations = state.read(|catalog| catalog.relations()).await?;
  Ok(Json(relations))
}
