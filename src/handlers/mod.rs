//! HTTP handlers for breeds and pets.

pub mod breeds;
pub mod pets;
pub use breeds::*;
pub use pets::*;
