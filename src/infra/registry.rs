//! In-memory user registry.
//!
//! Holds every registered [`User`] for the lifetime of the process. Entries
//! are never removed and nothing is persisted; all data is dropped on exit.
//!
//! Access is guarded by a reader/writer lock: lookups share the read side,
//! inserts take the write side for the whole check-then-append sequence so
//! two concurrent inserts of the same name pair cannot both succeed.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use lettre::message::Mailbox;
use thiserror::Error;

use crate::domain::User;

/// Errors produced by registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("invalid first name: {0:?}")]
    InvalidFirstName(String),

    #[error("invalid last name: {0:?}")]
    InvalidLastName(String),

    #[error("user with this name already exists")]
    DuplicateUser,

    #[error("invalid email: {0}")]
    InvalidEmail(String),

    /// No user matches the requested name pair
    #[error("no results found")]
    NotFound,

    #[error("registry lock poisoned")]
    Poisoned,

    /// A lookup performed on behalf of another operation failed
    #[error("error checking if user is already present: {0}")]
    Lookup(Box<RegistryError>),
}

impl RegistryError {
    /// Whether the caller supplied bad input (as opposed to an internal failure)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RegistryError::InvalidFirstName(_)
                | RegistryError::InvalidLastName(_)
                | RegistryError::DuplicateUser
                | RegistryError::InvalidEmail(_)
        )
    }
}

/// Result type alias for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Ordered, name-keyed collection of users.
#[derive(Debug, Default)]
pub struct Registry {
    users: RwLock<Vec<User>>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user.
    ///
    /// Checks run in a fixed order: first name, last name, duplicate name
    /// pair, then email. The registry is unchanged on every error path.
    pub fn add_user(&self, first_name: &str, last_name: &str, email: &str) -> RegistryResult<()> {
        if first_name.is_empty() {
            return Err(RegistryError::InvalidFirstName(first_name.to_string()));
        }

        if last_name.is_empty() {
            return Err(RegistryError::InvalidLastName(last_name.to_string()));
        }

        let mut users = self
            .write()
            .map_err(|e| RegistryError::Lookup(Box::new(e)))?;

        match find(&users, first_name, last_name) {
            Ok(_) => return Err(RegistryError::DuplicateUser),
            Err(RegistryError::NotFound) => {}
            Err(e) => return Err(RegistryError::Lookup(Box::new(e))),
        }

        let mailbox = parse_mailbox(email)?;

        users.push(User::new(first_name, last_name, mailbox));
        tracing::debug!(first_name, last_name, total = users.len(), "user registered");

        Ok(())
    }

    /// Find a user by exact first and last name.
    ///
    /// Returns an owned copy; empty names are valid keys that simply match
    /// nothing.
    pub fn get_user_by_name(&self, first_name: &str, last_name: &str) -> RegistryResult<User> {
        let users = self.read()?;
        find(&users, first_name, last_name).cloned()
    }

    /// Number of registered users
    pub fn len(&self) -> RegistryResult<usize> {
        Ok(self.read()?.len())
    }

    /// Check whether no users are registered
    pub fn is_empty(&self) -> RegistryResult<bool> {
        Ok(self.read()?.is_empty())
    }

    /// Teardown hook run when the process stops.
    ///
    /// Nothing is persisted; the entries are reported and dropped with the
    /// registry.
    pub fn shutdown(&self) {
        match self.len() {
            Ok(discarded) => tracing::info!(discarded, "user registry released"),
            Err(e) => tracing::warn!(error = %e, "user registry released without a count"),
        }
    }

    fn read(&self) -> RegistryResult<RwLockReadGuard<'_, Vec<User>>> {
        self.users.read().map_err(|_| RegistryError::Poisoned)
    }

    fn write(&self) -> RegistryResult<RwLockWriteGuard<'_, Vec<User>>> {
        self.users.write().map_err(|_| RegistryError::Poisoned)
    }
}

/// Scan in insertion order; first match wins.
fn find<'a>(users: &'a [User], first_name: &str, last_name: &str) -> RegistryResult<&'a User> {
    users
        .iter()
        .find(|user| user.has_name(first_name, last_name))
        .ok_or(RegistryError::NotFound)
}

/// Parse exactly one RFC 5322 mailbox (`addr@domain` or `Name <addr@domain>`).
fn parse_mailbox(raw: &str) -> RegistryResult<Mailbox> {
    raw.parse::<Mailbox>()
        .map_err(|_| RegistryError::InvalidEmail(raw.to_string()))
}
