#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use wpm_management::{app, AppState, ManagementStore, MemoryStore, Settings};

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    pub fn error_message(&self) -> String {
        self.json()["error"]["message"]
            .as_str()
            .expect("error envelope")
            .to_string()
    }

    pub fn location(&self) -> Option<&str> {
        self.headers.get(header::LOCATION).and_then(|v| v.to_str().ok())
    }
}

pub fn memory_app() -> Router {
    router_with(MemoryStore::new())
}

pub fn router_with<S: ManagementStore + 'static>(store: S) -> Router {
    app(AppState::new(store), &Settings::default())
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(b) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(b.to_string())
        }
        None => Body::empty(),
    };
    let resp = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    collect(resp).await
}

/// POST a body with no `Content-Type` header.
pub async fn send_without_content_type(app: &Router, uri: &str, body: &str) -> TestResponse {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap();
    collect(app.clone().oneshot(req).await.unwrap()).await
}

async fn collect(resp: axum::response::Response) -> TestResponse {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    TestResponse { status, headers, body }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: &str) -> TestResponse {
    send(app, Method::POST, uri, Some(body)).await
}

/// Create a breed and return its id.
pub async fn create_breed(app: &Router, name: &str) -> i64 {
    let resp = post(app, "/api/breeds", &serde_json::json!({ "name": name }).to_string()).await;
    assert_eq!(resp.status, StatusCode::CREATED);
    resp.json()["id"].as_i64().unwrap()
}
