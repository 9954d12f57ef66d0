//! Request validation for creation payloads.

use crate::error::AppError;
use crate::model::{BreedInsert, NewBreed, NewPet, PetInsert};

pub struct RequestValidator;

impl RequestValidator {
    /// Payload present, then name not blank.
    pub fn new_breed(payload: Option<NewBreed>) -> Result<BreedInsert, AppError> {
        let payload = payload.ok_or_else(|| AppError::BadRequest("Breed data is required.".into()))?;
        let name = required_name(payload.name)?;
        Ok(BreedInsert { name })
    }

    /// Payload present, then name not blank, then age non-negative.
    /// The breed reference is checked by the store on insert.
    pub fn new_pet(payload: Option<NewPet>) -> Result<PetInsert, AppError> {
        let payload = payload.ok_or_else(|| AppError::BadRequest("Pet data is required.".into()))?;
        let name = required_name(payload.name)?;
        if payload.age < 0 {
            return Err(AppError::BadRequest("Age must be a non-negative integer.".into()));
        }
        Ok(PetInsert {
            name,
            age: payload.age,
            breed_id: payload.breed_id,
        })
    }
}

/// Blank means absent, empty or whitespace only. The name is kept as sent.
/// NUL cannot be stored in a PostgreSQL `TEXT` column, so it is refused up front.
fn required_name(name: Option<String>) -> Result<String, AppError> {
    match name {
        Some(n) if n.trim().is_empty() => Err(AppError::BadRequest("Name is required.".into())),
        Some(n) if n.contains('\0') => Err(AppError::BadRequest(
            "Name must not contain NUL characters.".into(),
        )),
        Some(n) => Ok(n),
        None => Err(AppError::BadRequest("Name is required.".into())),
    }
}
