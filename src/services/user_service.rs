//! User service - Handles user-related use cases.
//!
//! Translates registry outcomes into application errors so the HTTP layer
//! only ever sees [`AppError`].

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::User;
use crate::errors::AppResult;
use crate::infra::Registry;

#[cfg(test)]
use mockall::automock;

/// User service trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user
    async fn add_user(&self, first_name: String, last_name: String, email: String) -> AppResult<()>;

    /// Get user by exact first and last name
    async fn get_user_by_name(&self, first_name: String, last_name: String) -> AppResult<User>;

    /// Number of registered users
    async fn count(&self) -> AppResult<usize>;
}

/// Concrete implementation of UserService backed by the in-memory registry.
pub struct UserManager {
    registry: Arc<Registry>,
}

impl UserManager {
    /// Create new user service instance over a shared registry
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn add_user(&self, first_name: String, last_name: String, email: String) -> AppResult<()> {
        self.registry
            .add_user(&first_name, &last_name, &email)
            .map_err(Into::into)
    }

    async fn get_user_by_name(&self, first_name: String, last_name: String) -> AppResult<User> {
        self.registry
            .get_user_by_name(&first_name, &last_name)
            .map_err(Into::into)
    }

    async fn count(&self) -> AppResult<usize> {
        self.registry.len().map_err(Into::into)
    }
}
