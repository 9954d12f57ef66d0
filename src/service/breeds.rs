//! Breed list, lookup and creation.

use super::RequestValidator;
use crate::error::{AppError, StoreError};
use crate::model::{Breed, NewBreed};
use crate::store::ManagementStore;

pub struct BreedService;

impl BreedService {
    pub async fn list(store: &dyn ManagementStore) -> Result<Vec<Breed>, AppError> {
        tracing::info!("Getting all breeds");
        store.list_breeds().await.map_err(|e| {
            tracing::error!(error = %e, "Error occurred while getting all breeds");
            AppError::Internal {
                message: "An error occurred while retrieving breeds.",
            }
        })
    }

    pub async fn get(store: &dyn ManagementStore, id: i32) -> Result<Breed, AppError> {
        tracing::info!(id, "Getting breed with id");
        let breed = store.find_breed(id).await.map_err(|e| {
            tracing::error!(id, error = %e, "Error occurred while getting breed by id");
            AppError::Internal {
                message: "An error occurred while retrieving the breed.",
            }
        })?;
        breed.ok_or_else(|| {
            tracing::warn!(id, "Breed not found");
            AppError::NotFound(format!("breed {}", id))
        })
    }

    /// Name uniqueness is decided by the store's unique constraint, not by a prior read.
    pub async fn create(store: &dyn ManagementStore, payload: Option<NewBreed>) -> Result<Breed, AppError> {
        tracing::info!(breed = ?payload, "Creating a new breed");
        let insert = RequestValidator::new_breed(payload).inspect_err(|e| {
            tracing::warn!(reason = %e, "Rejected breed payload");
        })?;
        match store.insert_breed(&insert).await {
            Ok(breed) => {
                tracing::info!(id = breed.id, "Created new breed");
                Ok(breed)
            }
            Err(StoreError::UniqueViolation { .. }) => {
                tracing::warn!(name = %insert.name, "Duplicate breed name");
                Err(AppError::BadRequest(format!(
                    "A breed with the name '{}' already exists.",
                    insert.name
                )))
            }
            Err(e) => {
                tracing::error!(error = %e, "Error occurred while creating a new breed");
                Err(AppError::Internal {
                    message: "An error occurred while creating the breed.",
                })
            }
        }
    }
}
