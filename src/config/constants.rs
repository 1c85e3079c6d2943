//! Application-wide constants
//!
//! Centralized location for fixed values of the HTTP surface and lifecycle.

use std::time::Duration;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Deadline for draining in-flight requests once shutdown begins
pub const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(10);

// =============================================================================
// Request Limits
// =============================================================================

/// Maximum accepted JSON request body (1 MiB)
pub const MAX_JSON_BODY_BYTES: usize = 1024 * 1024;

// =============================================================================
// Greeting Headers
// =============================================================================

/// Header carrying the first name for `/user/hello`.
///
/// Header names are case-insensitive; `HeaderName` stores them lowercased.
pub const HEADER_USER_FIRST: &str = "userfirst";

/// Header carrying the last name for `/user/hello`
pub const HEADER_USER_LAST: &str = "userlast";
