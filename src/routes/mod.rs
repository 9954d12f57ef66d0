//! Router assembly.

mod api;
mod common;
mod docs;
pub use api::api_routes;
pub use common::common_routes_with_ready;
pub use docs::{docs_routes, ApiDoc};

use crate::config::Settings;
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub const BREEDS_PATH: &str = "/api/breeds";
pub const PETS_PATH: &str = "/api/pets";

/// Full application: API, health/readiness/version and the OpenAPI document,
/// with request spans and responses logged at INFO and a request body size limit.
pub fn app(state: AppState, settings: &Settings) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(docs_routes())
        .merge(api_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(RequestBodyLimitLayer::new(settings.request_body_limit)),
        )
}
