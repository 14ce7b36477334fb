//! HTTP route handlers.
//!
//! - `api`: JSON endpoints
//! - `pages`: server-rendered HTML

pub mod api;
pub mod pages;

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
  Router::new().merge(api::routes()).merge(pages::routes())
}
