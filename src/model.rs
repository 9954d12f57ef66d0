//! Entities exposed by the API and the validated rows handed to the store.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Reference entity classifying pets by type. `name` is unique across breeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Breed {
    pub id: i32,
    pub name: String,
}

/// A pet with its breed attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub breed_id: i32,
    pub breed: Breed,
}

/// Body of `POST /api/breeds`. Any `id` sent by the client is ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NewBreed {
    #[serde(default)]
    pub name: Option<String>,
}

/// Body of `POST /api/pets`. Missing numbers read as 0.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewPet {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: i32,
    #[serde(default)]
    pub breed_id: i32,
}

/// Validated breed row, ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedInsert {
    pub name: String,
}

/// Validated pet row, ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetInsert {
    pub name: String,
    pub age: i32,
    pub breed_id: i32,
}
