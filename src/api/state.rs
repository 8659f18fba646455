//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::store::MemoryStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// currently the storage collaborator.
#[derive(Clone)]
pub struct AppState {
    /// The storage collaborator.
    store: Arc<MemoryStore>,
}

impl AppState {
    /// Creates a new application state around the given store.
    pub fn new(store: MemoryStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Returns a reference to the storage collaborator.
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }
}
