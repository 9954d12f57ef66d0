//! OpenAPI document.

use crate::error::{ErrorBody, ErrorDetail};
use crate::model::{Breed, NewBreed, NewPet, Pet};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::breeds::list_breeds,
        crate::handlers::breeds::get_breed,
        crate::handlers::breeds::create_breed,
        crate::handlers::pets::list_pets,
        crate::handlers::pets::get_pet,
        crate::handlers::pets::create_pet,
    ),
    components(schemas(Breed, Pet, NewBreed, NewPet, ErrorBody, ErrorDetail)),
    tags(
        (name = "breeds", description = "Pet breeds"),
        (name = "pets", description = "Pets and their breeds")
    )
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /api-docs/openapi.json
pub fn docs_routes() -> Router {
    Router::new().route("/api-docs/openapi.json", get(openapi))
}
