//! Shared application state for all routes.

use crate::store::ManagementStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Injected at construction; the only path from handlers to persistence.
    pub store: Arc<dyn ManagementStore>,
}

impl AppState {
    pub fn new<S: ManagementStore + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
