//! User Handlers

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::application::dto::{UserPayload, UserResponse};
use crate::application::services::UserError;
use crate::infrastructure::metrics;
use crate::presentation::http::extractors::AppJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Validation(e) => {
                metrics::record_validation_failure("users", e.kind());
                AppError::Validation(e)
            }
            UserError::NotFound => AppError::NotFound("User not found".into()),
            UserError::UsernameTaken => AppError::Conflict("Username already taken".into()),
            UserError::Storage(e) => AppError::Internal(e),
        }
    }
}

/// List all users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.users.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Create a user
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(body): AppJson<UserPayload>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = state.users.create_user(body).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/users/{}", user_id))],
        Json(json!({})),
    ))
}

/// Get user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.users.get_user(&user_id).await?;

    Ok(Json(UserResponse::from(user)))
}

/// Replace a user's username, creating the user under this ID if absent
pub async fn upsert_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    AppJson(body): AppJson<UserPayload>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.users.upsert_user(&user_id, body).await?;

    Ok(Json(json!({})))
}

/// Delete a user
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.users.delete_user(&user_id).await?;

    Ok(Json(json!({})))
}
