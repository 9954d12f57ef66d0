//! Request extractors that report rejections through [`crate::error::AppError`].

mod id;
mod payload;
pub use id::EntityId;
pub use payload::Payload;
