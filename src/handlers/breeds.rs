//! Breed handlers: list, get by id, create.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{EntityId, Payload};
use crate::model::{Breed, NewBreed};
use crate::response::{success_created, success_ok};
use crate::routes::BREEDS_PATH;
use crate::service::BreedService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

#[utoipa::path(
    get,
    path = "/api/breeds",
    tag = "breeds",
    responses(
        (status = 200, description = "All breeds", body = [Breed]),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list_breeds(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let breeds = BreedService::list(state.store.as_ref()).await?;
    Ok(success_ok(breeds))
}

#[utoipa::path(
    get,
    path = "/api/breeds/{id}",
    tag = "breeds",
    params(("id" = i32, Path, description = "Breed id")),
    responses(
        (status = 200, description = "The breed", body = Breed),
        (status = 400, description = "Id is not an integer", body = ErrorBody),
        (status = 404, description = "No breed with this id"),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn get_breed(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    let breed = BreedService::get(state.store.as_ref(), id).await?;
    Ok(success_ok(breed))
}

#[utoipa::path(
    post,
    path = "/api/breeds",
    tag = "breeds",
    request_body = NewBreed,
    responses(
        (status = 201, description = "Created; Location points at the new breed", body = Breed),
        (status = 400, description = "Missing payload, blank name or duplicate name", body = ErrorBody),
        (status = 413, description = "Body over the size limit", body = ErrorBody),
        (status = 415, description = "Body is not sent as JSON", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn create_breed(
    State(state): State<AppState>,
    Payload(payload): Payload<NewBreed>,
) -> Result<impl IntoResponse, AppError> {
    let breed = BreedService::create(state.store.as_ref(), payload).await?;
    Ok(success_created(BREEDS_PATH, breed.id, breed))
}
