//! OpenAPI documentation configuration.
//!
//! The generated document is served as JSON from `/api-docs/openapi.json`.

use utoipa::OpenApi;

use crate::api::handlers::greeting_handler::{self, GreetingRequest};
use crate::api::handlers::user_handler;
use crate::domain::{UserData, UserLookup};

/// OpenAPI documentation for the user directory
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Directory",
        version = "0.1.0",
        description = "In-memory registry of people reachable over JSON and header based endpoints",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        user_handler::add_user,
        user_handler::get_user,
        user_handler::hello_user,
        greeting_handler::goodbye,
        greeting_handler::hello_query,
        greeting_handler::hello_path,
        greeting_handler::hello_json,
    ),
    components(schemas(UserData, UserLookup, GreetingRequest)),
    tags(
        (name = "Users", description = "Register and look up users"),
        (name = "Greetings", description = "Plain-text greetings")
    )
)]
pub struct ApiDoc;
