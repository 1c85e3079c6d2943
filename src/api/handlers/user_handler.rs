//! User directory handlers.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Json,
    routing::post,
    Router,
};

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::config::{HEADER_USER_FIRST, HEADER_USER_LAST};
use crate::domain::{UserData, UserLookup};
use crate::errors::{AppError, AppResult};

/// Create user directory routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/add-user", post(add_user))
        .route("/get-user", post(get_user))
        .route("/user/hello", post(hello_user))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/add-user",
    tag = "Users",
    request_body = UserData,
    responses(
        (status = 201, description = "User registered"),
        (status = 400, description = "Malformed body, invalid field or duplicate name"),
        (status = 415, description = "Content-Type is not application/json")
    )
)]
pub async fn add_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UserData>,
) -> AppResult<StatusCode> {
    state
        .user_service
        .add_user(payload.first_name, payload.last_name, payload.email)
        .await?;

    Ok(StatusCode::CREATED)
}

/// Look a user up by name
#[utoipa::path(
    post,
    path = "/get-user",
    tag = "Users",
    request_body = UserLookup,
    responses(
        (status = 200, description = "User found", body = UserData),
        (status = 400, description = "Malformed body"),
        (status = 404, description = "No user with that name"),
        (status = 415, description = "Content-Type is not application/json"),
        (status = 500, description = "Unexpected lookup failure")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UserLookup>,
) -> AppResult<Json<UserData>> {
    let user = state
        .user_service
        .get_user_by_name(payload.first_name, payload.last_name)
        .await?;

    Ok(Json(UserData::from(user)))
}

/// Greet a user identified by the `userFirst` / `userLast` headers
#[utoipa::path(
    post,
    path = "/user/hello",
    tag = "Users",
    params(
        ("userFirst" = String, Header, description = "First name"),
        ("userLast" = String, Header, description = "Last name")
    ),
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing name header"),
        (status = 404, description = "No user with that name"),
        (status = 500, description = "Unexpected lookup failure")
    )
)]
pub async fn hello_user(State(state): State<AppState>, headers: HeaderMap) -> AppResult<String> {
    let first_name = header_value(&headers, HEADER_USER_FIRST)
        .ok_or_else(|| AppError::bad_request("invalid first name provided"))?;
    let last_name = header_value(&headers, HEADER_USER_LAST)
        .ok_or_else(|| AppError::bad_request("invalid last name provided"))?;

    let user = state
        .user_service
        .get_user_by_name(first_name, last_name)
        .await?;

    Ok(format!(
        "Hello, {} {}!  Your email is: {}\n",
        user.first_name,
        user.last_name,
        user.email_address()
    ))
}

/// Non-empty UTF-8 header value, if present
fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
