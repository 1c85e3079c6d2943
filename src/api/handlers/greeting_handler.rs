//! Plain-text greeting handlers.
//!
//! These routes never touch the registry.

use axum::{
    body::Bytes,
    extract::{Path, Query},
    routing::{any, get, post},
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::api::AppState;
use crate::errors::{AppError, AppResult};

/// Name used when `/hello/` is called without a `user` parameter
const DEFAULT_GREETING_NAME: &str = "User";

/// Create greeting routes
pub fn greeting_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/goodbye", any(goodbye))
        .route("/goodbye/", any(goodbye))
        .route("/hello", any(hello_query))
        .route("/hello/", any(hello_query))
        .route("/responses/:user/hello/", any(hello_path))
        .route("/json", post(hello_json))
}

/// Query string accepted by `/hello/`
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HelloQuery {
    /// Name to greet
    pub user: Option<String>,
}

/// Body accepted by `POST /json`. Other fields are ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GreetingRequest {
    #[serde(default, alias = "FirstName")]
    #[schema(example = "TestMan")]
    pub first_name: String,
}

/// Root endpoint
pub async fn root() -> &'static str {
    "Welcome to our homepage!\n"
}

/// Say goodbye
#[utoipa::path(
    get,
    path = "/goodbye/",
    tag = "Greetings",
    responses((status = 200, description = "Farewell", body = String, content_type = "text/plain"))
)]
pub async fn goodbye() -> &'static str {
    "Goodbye!\n"
}

/// Greet the `user` query parameter, or "User" when absent
#[utoipa::path(
    get,
    path = "/hello/",
    tag = "Greetings",
    params(HelloQuery),
    responses((status = 200, description = "Greeting", body = String, content_type = "text/plain"))
)]
pub async fn hello_query(Query(query): Query<HelloQuery>) -> String {
    greeting(query.user.as_deref().unwrap_or(DEFAULT_GREETING_NAME))
}

/// Greet the name taken from the path
#[utoipa::path(
    get,
    path = "/responses/{user}/hello/",
    tag = "Greetings",
    params(("user" = String, Path, description = "Name to greet")),
    responses((status = 200, description = "Greeting", body = String, content_type = "text/plain"))
)]
pub async fn hello_path(Path(user): Path<String>) -> String {
    greeting(&user)
}

/// Greet the `firstName` from a JSON body
#[utoipa::path(
    post,
    path = "/json",
    tag = "Greetings",
    request_body = GreetingRequest,
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain"),
        (status = 400, description = "Empty or malformed body, or empty name")
    )
)]
pub async fn hello_json(body: Bytes) -> AppResult<String> {
    if body.is_empty() {
        return Err(AppError::bad_request("bad request body"));
    }

    let request: GreetingRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "error unmarshalling greeting body");
        AppError::bad_request("error parsing request JSON")
    })?;

    if request.first_name.is_empty() {
        return Err(AppError::bad_request("invalid username provided"));
    }

    Ok(greeting(&request.first_name))
}

fn greeting(name: &str) -> String {
    format!("Hello, {}!\n", name)
}
