mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use common::{get, post, router_with};
use wpm_management::{Breed, BreedInsert, ManagementStore, Pet, PetInsert, StoreError};

/// Store whose every call fails as if the database were unreachable.
struct DownStore;

fn down() -> StoreError {
    StoreError::Db(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl ManagementStore for DownStore {
    async fn list_breeds(&self) -> Result<Vec<Breed>, StoreError> {
        Err(down())
    }
    async fn find_breed(&self, _id: i32) -> Result<Option<Breed>, StoreError> {
        Err(down())
    }
    async fn insert_breed(&self, _breed: &BreedInsert) -> Result<Breed, StoreError> {
        Err(down())
    }
    async fn list_pets(&self) -> Result<Vec<Pet>, StoreError> {
        Err(down())
    }
    async fn find_pet(&self, _id: i32) -> Result<Option<Pet>, StoreError> {
        Err(down())
    }
    async fn insert_pet(&self, _pet: &PetInsert) -> Result<Pet, StoreError> {
        Err(down())
    }
    async fn ping(&self) -> Result<(), StoreError> {
        Err(down())
    }
}

#[tokio::test]
async fn store_failures_map_to_fixed_messages() {
    let app = router_with(DownStore);
    let cases = [
        (get(&app, "/api/breeds").await, "An error occurred while retrieving breeds."),
        (get(&app, "/api/breeds/1").await, "An error occurred while retrieving the breed."),
        (
            post(&app, "/api/breeds", r#"{"name":"Labrador"}"#).await,
            "An error occurred while creating the breed.",
        ),
        (get(&app, "/api/pets").await, "An error occurred while retrieving pets."),
        (get(&app, "/api/pets/1").await, "An error occurred while retrieving the pet."),
        (
            post(&app, "/api/pets", r#"{"name":"Rex","age":3,"breedId":1}"#).await,
            "An error occurred while creating the pet.",
        ),
    ];
    for (resp, message) in cases {
        assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(resp.json()["error"]["code"], "internal_error");
        assert_eq!(resp.error_message(), message);
        assert!(!String::from_utf8_lossy(&resp.body).contains("pool timed out"));
    }
}

#[tokio::test]
async fn validation_precedes_store_access() {
    let app = router_with(DownStore);
    let resp = post(&app, "/api/breeds", r#"{"name":""}"#).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    let resp = post(&app, "/api/pets", r#"{"name":"Rex","age":-2,"breedId":1}"#).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn readiness_reports_degraded_store() {
    let app = router_with(DownStore);
    let resp = get(&app, "/ready").await;
    assert_eq!(resp.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(resp.json()["store"], "unavailable");
    assert_eq!(get(&app, "/health").await.status, StatusCode::OK);
}
