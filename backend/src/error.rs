//! HTTP error mapping for JSON and HTML handlers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;
use tourbook_core::CoreError;
use tourbook_core::domain::ParseArtistIdError;

use crate::render;

pub type ApiResult<T> = Result<T, ApiError>;

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
  pub error: String,
}

/// An error outcome with the status it maps to.
#[derive(Debug)]
pub struct ApiError {
  status: StatusCode,
  message: String,
}

impl ApiError {
  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn not_found(message: impl Into<String>) -> Self {
    Self::new(StatusCode::NOT_FOUND, message)
  }

  pub fn internal(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }

  pub fn artist_not_found() -> Self {
    Self::not_found("Artist not found")
  }

  /// Same outcome, rendered as an HTML error page.
  pub fn into_page(self) -> PageError {
    PageError(self)
  }

  fn new(status: StatusCode, message: impl Into<String>) -> Self {
    Self { status, message: message.into() }
  }
}

impl From<CoreError> for ApiError {
  fn from(err: CoreError) -> Self {
    tracing::error!(error = %err, "catalog operation failed");
    Self::internal(err.to_string())
  }
}

impl From<ParseArtistIdError> for ApiError {
  fn from(err: ParseArtistIdError) -> Self {
    tracing::debug!(input = err.input(), "rejected artist id");
    Self::bad_request("Invalid artist ID")
  }
}

impl From<tokio::task::JoinError> for ApiError {
  fn from(err: tokio::task::JoinError) -> Self {
    tracing::error!(error = %err, "blocking catalog task failed");
    Self::internal("internal error")
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    (self.status, Json(ApiErrorBody { error: self.message })).into_response()
  }
}

/// [`ApiError`] for the server-rendered pages.
#[derive(Debug)]
pub struct PageError(pub ApiError);

impl From<ApiError> for PageError {
  fn from(err: ApiError) -> Self {
    PageError(err)
  }
}

macro_rules! page_error_from {
  ($($source:ty),+ $(,)?) => {
    $(
      impl From<$source> for PageError {
        fn from(err: $source) -> Self {
          PageError(ApiError::from(err))
        }
      }
    )+
  };
}

page_error_from!(CoreError, ParseArtistIdError, tokio::task::JoinError);

impl IntoResponse for PageError {
  fn into_response(self) -> Response {
    (self.0.status, Html(render::error_page(self.0.status, &self.0.message))).into_response()
  }
}
