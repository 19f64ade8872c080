//! Custom Extractors
//!
//! Axum extractors for request parsing.

use axum::extract::{rejection::JsonRejection, FromRequest};

use crate::shared::error::AppError;

/// JSON body extractor whose rejections use the API's error body.
///
/// Malformed JSON, a non-JSON content type, or a body that does not fit the
/// payload shape becomes a 400 `{message}` instead of axum's plain-text reply.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
