mod common;

use axum::http::StatusCode;
use common::{get, memory_app};

#[tokio::test]
async fn health_ready_and_version() {
    let app = memory_app();
    assert_eq!(get(&app, "/health").await.json()["status"], "ok");

    let ready = get(&app, "/ready").await;
    assert_eq!(ready.status, StatusCode::OK);
    assert_eq!(ready.json()["store"], "ok");

    let version = get(&app, "/version").await.json();
    assert_eq!(version["name"], "wpm-management");
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let app = memory_app();
    let resp = get(&app, "/api-docs/openapi.json").await;
    assert_eq!(resp.status, StatusCode::OK);
    let doc = resp.json();
    let paths = doc["paths"].as_object().unwrap();
    for path in ["/api/breeds", "/api/breeds/{id}", "/api/pets", "/api/pets/{id}"] {
        assert!(paths.contains_key(path), "missing {}", path);
    }
    assert!(paths["/api/breeds"]["post"].is_object());
    assert!(doc["components"]["schemas"]["Pet"].is_object());
}
