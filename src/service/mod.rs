//! Breed and pet operations: validate, then read from or write to the store.

mod breeds;
mod pets;
mod validation;
pub use breeds::BreedService;
pub use pets::PetService;
pub use validation::RequestValidator;
