//! Application services layer - Use cases.
//!
//! Services depend on abstractions (traits) so the HTTP layer can be
//! exercised against mocks.

mod user_service;

pub use user_service::{UserManager, UserService};

#[cfg(test)]
pub use user_service::MockUserService;
