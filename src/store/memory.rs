//! In-process store with the same constraints as the PostgreSQL schema.

use super::ManagementStore;
use crate::error::StoreError;
use crate::model::{Breed, BreedInsert, Pet, PetInsert};
use async_trait::async_trait;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Tables {
    breeds: Vec<Breed>,
    pets: Vec<StoredPet>,
    next_breed_id: i32,
    next_pet_id: i32,
}

struct StoredPet {
    id: i32,
    row: PetInsert,
}

impl Tables {
    fn breed(&self, id: i32) -> Option<&Breed> {
        self.breeds.iter().find(|b| b.id == id)
    }

    fn join(&self, pet: &StoredPet) -> Option<Pet> {
        let breed = self.breed(pet.row.breed_id)?.clone();
        Some(Pet {
            id: pet.id,
            name: pet.row.name.clone(),
            age: pet.row.age,
            breed_id: pet.row.breed_id,
            breed,
        })
    }
}

/// Store kept in memory for the lifetime of the process. Ids start at 1.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.tables
            .read()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.tables
            .write()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".into()))
    }
}

#[async_trait]
impl ManagementStore for MemoryStore {
    async fn list_breeds(&self) -> Result<Vec<Breed>, StoreError> {
        Ok(self.read()?.breeds.clone())
    }

    async fn find_breed(&self, id: i32) -> Result<Option<Breed>, StoreError> {
        Ok(self.read()?.breed(id).cloned())
    }

    async fn insert_breed(&self, breed: &BreedInsert) -> Result<Breed, StoreError> {
        let mut t = self.write()?;
        if t.breeds.iter().any(|b| b.name == breed.name) {
            return Err(StoreError::UniqueViolation {
                constraint: "breeds_name_key".into(),
            });
        }
        t.next_breed_id += 1;
        let created = Breed {
            id: t.next_breed_id,
            name: breed.name.clone(),
        };
        t.breeds.push(created.clone());
        Ok(created)
    }

    async fn list_pets(&self) -> Result<Vec<Pet>, StoreError> {
        let t = self.read()?;
        Ok(t.pets.iter().filter_map(|p| t.join(p)).collect())
    }

    async fn find_pet(&self, id: i32) -> Result<Option<Pet>, StoreError> {
        let t = self.read()?;
        Ok(t.pets.iter().find(|p| p.id == id).and_then(|p| t.join(p)))
    }

    async fn insert_pet(&self, pet: &PetInsert) -> Result<Pet, StoreError> {
        let mut t = self.write()?;
        if pet.age < 0 {
            return Err(StoreError::CheckViolation {
                constraint: "pets_age_check".into(),
            });
        }
        if t.breed(pet.breed_id).is_none() {
            return Err(StoreError::ForeignKeyViolation {
                constraint: "pets_breed_id_fkey".into(),
            });
        }
        t.next_pet_id += 1;
        let row = StoredPet {
            id: t.next_pet_id,
            row: pet.clone(),
        };
        let created = t.join(&row).ok_or_else(|| {
            StoreError::Unavailable(format!("breed {} vanished during insert", pet.breed_id))
        })?;
        t.pets.push(row);
        Ok(created)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.read().map(|_| ())
    }
}
