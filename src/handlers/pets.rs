//! Pet handlers: list, get by id, create.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{EntityId, Payload};
use crate::model::{NewPet, Pet};
use crate::response::{success_created, success_ok};
use crate::routes::PETS_PATH;
use crate::service::PetService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

#[utoipa::path(
    get,
    path = "/api/pets",
    tag = "pets",
    responses(
        (status = 200, description = "All pets with their breeds", body = [Pet]),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list_pets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let pets = PetService::list(state.store.as_ref()).await?;
    Ok(success_ok(pets))
}

#[utoipa::path(
    get,
    path = "/api/pets/{id}",
    tag = "pets",
    params(("id" = i32, Path, description = "Pet id")),
    responses(
        (status = 200, description = "The pet with its breed", body = Pet),
        (status = 400, description = "Id is not an integer", body = ErrorBody),
        (status = 404, description = "No pet with this id"),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn get_pet(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    let pet = PetService::get(state.store.as_ref(), id).await?;
    Ok(success_ok(pet))
}

#[utoipa::path(
    post,
    path = "/api/pets",
    tag = "pets",
    request_body = NewPet,
    responses(
        (status = 201, description = "Created; Location points at the new pet", body = Pet),
        (status = 400, description = "Missing payload, blank name, negative age or unknown breed", body = ErrorBody),
        (status = 413, description = "Body over the size limit", body = ErrorBody),
        (status = 415, description = "Body is not sent as JSON", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn create_pet(
    State(state): State<AppState>,
    Payload(payload): Payload<NewPet>,
) -> Result<impl IntoResponse, AppError> {
    let pet = PetService::create(state.store.as_ref(), payload).await?;
    Ok(success_created(PETS_PATH, pet.id, pet))
}
