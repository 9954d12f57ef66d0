//! Liveness, readiness and build info for orchestrators and load balancers.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

/// Liveness answer: the process is up and routing requests.
#[derive(Serialize)]
struct Liveness {
    status: &'static str,
}

/// Readiness answer. `store` is `ok` when a round trip to the data store succeeded.
#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    store: &'static str,
}

async fn live() -> Json<Liveness> {
    Json(Liveness { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(Readiness {
                status: "ok",
                store: "ok",
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "store ping failed; reporting not ready");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Readiness {
                    status: "degraded",
                    store: "unavailable",
                }),
            )
        }
    }
}

async fn build_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "description": env!("CARGO_PKG_DESCRIPTION"),
    }))
}

/// `/health` never touches the store; `/ready` returns 503 while the store is unreachable.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/health", get(live))
        .route("/ready", get(ready))
        .route("/version", get(build_info))
        .with_state(state)
}
