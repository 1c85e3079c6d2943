//! Infrastructure layer - Storage backing the services
//!
//! The only store is the process-lifetime, in-memory user registry.

pub mod registry;

pub use registry::{Registry, RegistryError, RegistryResult};
