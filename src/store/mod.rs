//! Data-access context: typed access to breeds and pets.
//!
//! Uniqueness of breed names, the pet → breed reference and the non-negative age are
//! enforced by the store itself and surface as [`StoreError`] constraint variants.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::{ensure_database_exists, ensure_tables, PgStore};

use crate::error::StoreError;
use crate::model::{Breed, BreedInsert, Pet, PetInsert};
use async_trait::async_trait;

#[async_trait]
pub trait ManagementStore: Send + Sync {
    /// All breeds ordered by id.
    async fn list_breeds(&self) -> Result<Vec<Breed>, StoreError>;

    async fn find_breed(&self, id: i32) -> Result<Option<Breed>, StoreError>;

    /// Insert and return the stored row with its assigned id.
    async fn insert_breed(&self, breed: &BreedInsert) -> Result<Breed, StoreError>;

    /// All pets ordered by id, each joined with its breed.
    async fn list_pets(&self) -> Result<Vec<Pet>, StoreError>;

    async fn find_pet(&self, id: i32) -> Result<Option<Pet>, StoreError>;

    /// Insert and return the stored row joined with its breed.
    async fn insert_pet(&self, pet: &PetInsert) -> Result<Pet, StoreError>;

    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), StoreError>;
}
