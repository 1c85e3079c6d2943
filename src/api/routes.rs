//! Application route configuration.

use axum::{
    extract::{DefaultBodyLimit, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use super::handlers::{greeting_routes, user_routes};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::MAX_JSON_BODY_BYTES;
use crate::errors::AppResult;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(greeting_routes())
        .merge(user_routes())
        // Global middleware
        .layer(DefaultBodyLimit::max(MAX_JSON_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    users: usize,
}

/// Health check endpoint reporting the registry size
async fn health(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    let users = state.user_service.count().await?;

    Ok(Json(HealthResponse {
        status: "healthy",
        users,
    }))
}

/// Generated OpenAPI document
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
