//! Route tests: HTTP → router → catalog service → in-memory or file snapshots.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use tower::ServiceExt;

use tourbook_core::MemoryCatalog;
use tourbook_core::domain::{Artist, DateRecord, LocationRecord, RelationRecord};
use tourbook_lib::config::ServerConfig;
use tourbook_lib::server::Server;
use tourbook_storage::JsonSnapshotStore;

fn strings(values: &[&str]) -> Vec<String> {
  values.iter().map(|v| v.to_string()).collect()
}

fn catalog() -> MemoryCatalog {
  let mut relations = BTreeMap::new();
  relations.insert("paris-france".to_string(), strings(&["01-02-2020"]));

  MemoryCatalog::new(vec![
    Artist::new(1, "Alice"),
    Artist::new(2, "Bob"),
    Artist::new(3, "<Tom & Jerry>"),
  ])
  .with_locations(vec![
    LocationRecord::new(1, strings(&["Paris", "Tokyo"])),
    LocationRecord::new(42, strings(&["Atlantis"])),
  ])
  .with_dates(vec![DateRecord::new(2, strings(&["*23-08-2019"]))])
  .with_relations(vec![RelationRecord::new(1, relations)])
}

fn router_with(source: impl tourbook_core::ports::CatalogSource + Send + Sync + 'static) -> axum::Router {
  Server::new(ServerConfig::default(), Arc::new(source)).router()
}

fn router() -> axum::Router {
  router_with(catalog())
}

async fn get(router: axum::Router, uri: &str) -> (StatusCode, String) {
  let request = Request::builder().method(Method::GET).uri(uri).body(Body::empty()).unwrap();
  let response = router.oneshot(request).await.unwrap();
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
  (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn get_json(router: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
  let (status, body) = get(router, uri).await;
  let json = serde_json::from_str(&body).unwrap_or_else(|e| panic!("invalid JSON ({e}): {body}"));
  (status, json)
}

#[tokio::test]
async fn index_wraps_artists() {
  let (status, json) = get_json(router(), "/").await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(json["artists"].as_array().unwrap().len(), 3);
  assert_eq!(json["artists"][0]["name"], "Alice");
}

#[tokio::test]
async fn artists_list_uses_upstream_field_names() {
  let (status, json) = get_json(router(), "/artists").await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(json[1]["id"], 2);
  assert!(json[1].get("creationDate").is_some());
  assert!(json[1].get("firstAlbum").is_some());
}

#[tokio::test]
async fn single_artist_lookup() {
  let (status, json) = get_json(router(), "/artist/2").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(json["name"], "Bob");

  let (status, json) = get_json(router(), "/artist/99").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(json["error"], "Artist not found");
}

#[tokio::test]
async fn malformed_ids_are_rejected_before_lookup() {
  for uri in ["/artist/abc", "/artist/-1", "/artist/1.5"] {
    let (status, json) = get_json(router(), uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
    assert_eq!(json["error"], "Invalid artist ID");
  }

  let (status, body) = get(router(), "/artist/dates/xyz").await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body.contains("Invalid artist ID"));
}

#[tokio::test]
async fn artist_with_id_zero_is_not_a_sentinel() {
  let router = router_with(MemoryCatalog::new(vec![Artist::new(0, "Nobody")]));

  let (status, json) = get_json(router, "/artist/0").await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(json["name"], "Nobody");
}

#[tokio::test]
async fn annexed_collections_are_joined_with_names() {
  let (status, json) = get_json(router(), "/locations").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(json["index"][0]["name"], "Alice");
  assert_eq!(json["index"][0]["locations"][1], "Tokyo");
  assert_eq!(json["index"][1]["name"], "");

  let (_, json) = get_json(router(), "/dates").await;
  assert_eq!(json["index"][0]["name"], "Bob");

  let (_, json) = get_json(router(), "/relations").await;
  assert_eq!(json["index"][0]["name"], "Alice");
  assert_eq!(json["index"][0]["datesLocations"]["paris-france"][0], "01-02-2020");
}

#[tokio::test]
async fn artist_pages_render_projections() {
  let (status, body) = get(router(), "/artist/locations/1").await;
  assert_eq!(status, StatusCode::OK);
  assert!(body.contains("<h1>Alice</h1>"));
  assert!(body.contains("<li>Paris</li>\n<li>Tokyo</li>"));

  let (status, body) = get(router(), "/artist/dates/2").await;
  assert_eq!(status, StatusCode::OK);
  assert!(body.contains("<li>*23-08-2019</li>"));

  let (status, body) = get(router(), "/artist/relations/1").await;
  assert_eq!(status, StatusCode::OK);
  assert!(body.contains("<dt>paris-france</dt>"));
}

#[tokio::test]
async fn artist_pages_404_without_artist_or_record() {
  let (status, body) = get(router(), "/artist/locations/99").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert!(body.contains("<h1>404</h1>"));

  let (status, _) = get(router(), "/artist/dates/1").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_filters_case_insensitively() {
  let (status, body) = get(router(), "/search?query=BO").await;

  assert_eq!(status, StatusCode::OK);
  assert!(body.contains("<strong>Bob</strong>"));
  assert!(!body.contains("<strong>Alice</strong>"));
}

#[tokio::test]
async fn search_without_query_lists_everyone_escaped() {
  let (status, body) = get(router(), "/search").await;

  assert_eq!(status, StatusCode::OK);
  assert!(body.contains("<strong>Alice</strong>"));
  assert!(body.contains("<strong>&lt;Tom &amp; Jerry&gt;</strong>"));
}

#[tokio::test]
async fn missing_snapshots_surface_as_server_errors() {
  let tmp = tempfile::tempdir().unwrap();
  let store = JsonSnapshotStore::new(tmp.path());

  let (status, json) = get_json(router_with(store.clone()), "/artists").await;
  assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
  assert!(json["error"].as_str().unwrap().starts_with("data unavailable"));

  let (status, body) = get(router_with(store), "/artist/locations/1").await;
  assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
  assert!(body.contains("<h1>500</h1>"));
}

#[tokio::test]
async fn file_snapshots_are_reread_per_request() {
  let tmp = tempfile::tempdir().unwrap();
  std::fs::write(tmp.path().join("artists.json"), r#"[{"id":1,"name":"Queen"}]"#).unwrap();
  let router = router_with(JsonSnapshotStore::new(tmp.path()));

  let (_, json) = get_json(router.clone(), "/artists").await;
  assert_eq!(json.as_array().unwrap().len(), 1);

  std::fs::write(tmp.path().join("artists.json"), r#"[{"id":1,"name":"Queen"},{"id":2,"name":"SOJA"}]"#)
    .unwrap();

  let (_, json) = get_json(router, "/artists").await;
  assert_eq!(json[1]["name"], "SOJA");
}

#[tokio::test]
async fn health_and_fallback() {
  let (status, body) = get(router(), "/health").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, "OK");

  let (status, json) = get_json(router(), "/nope").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(json["error"], "Not found");
}

#[tokio::test]
async fn cors_preflight_allows_configured_origin() {
  let request = Request::builder()
    .method(Method::OPTIONS)
    .uri("/artists")
    .header(header::ORIGIN, "http://localhost:5173")
    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
    .body(Body::empty())
    .unwrap();

  let response = router().oneshot(request).await.unwrap();

  let headers = response.headers();
  assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "http://localhost:5173");
  assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(), "true");
}
