//! User Directory - an in-memory registry of people served over HTTP
//!
//! Users (first name, last name, email) are registered and looked up by
//! their exact name pair. Nothing is persisted: the registry lives as long
//! as the process.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities
//! - **infra**: The in-memory user registry
//! - **services**: Application use cases
//! - **api**: HTTP handlers, extractors, and routes
//! - **lifecycle**: Listener start, signal handling and graceful shutdown
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server on the default 0.0.0.0:8080
//! cargo run -- serve
//!
//! # Bind elsewhere
//! cargo run -- serve --host 127.0.0.1 --port 3000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod lifecycle;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::User;
pub use errors::{AppError, AppResult};
pub use infra::{Registry, RegistryError};
