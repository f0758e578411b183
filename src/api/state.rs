use std::sync::Arc;

use crate::store::SocialStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Read-only view of the persistence collaborator
    pub store: Arc<dyn SocialStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn SocialStore>) -> Self {
        Self { store }
    }
}
