//! Success response helpers.

use axum::{
    http::{header, StatusCode},
    Json,
};
use serde::Serialize;

pub fn success_ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

/// 201 with a `Location` header pointing at the get-by-id route of the new record.
pub fn success_created<T: Serialize>(
    collection_path: &str,
    id: i32,
    data: T,
) -> (StatusCode, [(header::HeaderName, String); 1], Json<T>) {
    (
        StatusCode::CREATED,
        [(header::LOCATION, format!("{}/{}", collection_path, id))],
        Json(data),
    )
}
