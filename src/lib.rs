//! Pet management API: breeds and pets over a relational store.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::{Settings, StoreKind};
pub use error::{AppError, ConfigError, StoreError};
pub use model::{Breed, BreedInsert, NewBreed, NewPet, Pet, PetInsert};
pub use routes::{api_routes, app, common_routes_with_ready};
pub use service::{BreedService, PetService};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables, ManagementStore, MemoryStore, PgStore};
