//! Breed and pet routes.

use super::{BREEDS_PATH, PETS_PATH};
use crate::handlers::{create_breed, create_pet, get_breed, get_pet, list_breeds, list_pets};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(BREEDS_PATH, get(list_breeds).post(create_breed))
        .route(&format!("{}/:id", BREEDS_PATH), get(get_breed))
        .route(PETS_PATH, get(list_pets).post(create_pet))
        .route(&format!("{}/:id", PETS_PATH), get(get_pet))
        .with_state(state)
}
