//! Lifecycle management for the HTTP listener.
//!
//! # Data Flow
//! ```text
//! Stopped → Starting   bind the listener
//! Starting → Running   listener accepting, server task spawned
//! Running → Stopping   first termination signal (later ones are ignored)
//! Stopping → Stopped   in-flight requests drained, or the grace period
//!                      elapsed and the server task was aborted
//! ```
//!
//! Listener failures before a shutdown was requested, bind failures and an
//! exceeded grace period are all returned as errors; the binary exits with a
//! non-zero status on any of them.

mod server;
mod shutdown;
mod signals;
mod state;

pub use server::Lifecycle;
pub use shutdown::Shutdown;
pub use signals::shutdown_signal;
pub use state::ServerState;
