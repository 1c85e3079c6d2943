//! JSON body extractor with the directory's rejection rules.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::header::CONTENT_TYPE,
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON extractor that reports rejections as [`AppError`].
///
/// A missing or non-JSON `Content-Type` becomes `415`; every other failure
/// (syntax, unknown or mistyped fields, body over the size limit) becomes
/// `400`.
///
/// # Example
///
/// ```rust,ignore
/// use user_directory::api::extractors::JsonBody;
/// use user_directory::domain::UserLookup;
///
/// async fn lookup(JsonBody(payload): JsonBody<UserLookup>) {
///     // payload decoded, unknown fields already rejected
/// }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(JsonRejection::MissingJsonContentType(_)) => Err(AppError::UnsupportedMediaType(
                format!("unsupported Content-Type header: {:?}", content_type),
            )),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "rejected request body");
                Err(AppError::bad_request(format!(
                    "error decoding request body: {}",
                    rejection.body_text()
                )))
            }
        }
    }
}
