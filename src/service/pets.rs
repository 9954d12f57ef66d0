//! Pet list, lookup and creation. Every pet is returned with its breed.

use super::RequestValidator;
use crate::error::{AppError, StoreError};
use crate::model::{NewPet, Pet};
use crate::store::ManagementStore;

pub struct PetService;

impl PetService {
    pub async fn list(store: &dyn ManagementStore) -> Result<Vec<Pet>, AppError> {
        tracing::info!("Getting all pets with their breeds");
        store.list_pets().await.map_err(|e| {
            tracing::error!(error = %e, "Error occurred while getting all pets");
            AppError::Internal {
                message: "An error occurred while retrieving pets.",
            }
        })
    }

    pub async fn get(store: &dyn ManagementStore, id: i32) -> Result<Pet, AppError> {
        tracing::info!(id, "Getting pet with id");
        let pet = store.find_pet(id).await.map_err(|e| {
            tracing::error!(id, error = %e, "Error occurred while getting pet by id");
            AppError::Internal {
                message: "An error occurred while retrieving the pet.",
            }
        })?;
        pet.ok_or_else(|| {
            tracing::warn!(id, "Pet not found");
            AppError::NotFound(format!("pet {}", id))
        })
    }

    /// The breed reference is decided by the store's foreign key, not by a prior read.
    pub async fn create(store: &dyn ManagementStore, payload: Option<NewPet>) -> Result<Pet, AppError> {
        tracing::info!(pet = ?payload, "Creating a new pet");
        let insert = RequestValidator::new_pet(payload).inspect_err(|e| {
            tracing::warn!(reason = %e, "Rejected pet payload");
        })?;
        match store.insert_pet(&insert).await {
            Ok(pet) => {
                tracing::info!(id = pet.id, breed_id = pet.breed_id, "Created new pet");
                Ok(pet)
            }
            Err(StoreError::ForeignKeyViolation { .. }) => {
                tracing::warn!(breed_id = insert.breed_id, "Unknown breed for new pet");
                Err(AppError::BadRequest(format!(
                    "Breed with Id {} does not exist.",
                    insert.breed_id
                )))
            }
            Err(StoreError::CheckViolation { constraint }) => {
                tracing::warn!(%constraint, "Pet row rejected by check constraint");
                Err(AppError::BadRequest("Age must be a non-negative integer.".into()))
            }
            Err(e) => {
                tracing::error!(error = %e, "Error occurred while creating a new pet");
                Err(AppError::Internal {
                    message: "An error occurred while creating the pet.",
                })
            }
        }
    }
}
