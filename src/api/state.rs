//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::Registry;
use crate::services::{UserManager, UserService};

/// Application state shared by every handler.
///
/// Holds the service behind a trait object so tests can inject mocks; the
/// registry itself is owned by the caller and never a global.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Create application state with a manually injected service
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Create application state backed by the given registry
    pub fn from_registry(registry: Arc<Registry>) -> Self {
        Self::new(Arc::new(UserManager::new(registry)))
    }
}
