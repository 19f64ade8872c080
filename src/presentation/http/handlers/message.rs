//! Message Handlers

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::application::dto::{MessageFilterQuery, MessagePayload, MessageResponse};
use crate::application::services::MessageError;
use crate::infrastructure::metrics;
use crate::presentation::http::extractors::AppJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

impl From<MessageError> for AppError {
    fn from(err: MessageError) -> Self {
        match err {
            MessageError::Validation(e) => {
                metrics::record_validation_failure("messages", e.kind());
                AppError::Validation(e)
            }
            MessageError::NotFound => AppError::NotFound("Message not found".into()),
            MessageError::Storage(e) => AppError::Internal(e),
        }
    }
}

/// List messages, optionally filtered by sender and/or recipient
pub async fn list_messages(
    State(state): State<AppState>,
    Query(query): Query<MessageFilterQuery>,
) -> Result<Json<Vec<MessageResponse>>, AppError> {
    let messages = state.messages.list_messages(query.into_filter()).await?;

    Ok(Json(messages.into_iter().map(MessageResponse::from).collect()))
}

/// Send a message
pub async fn create_message(
    State(state): State<AppState>,
    AppJson(body): AppJson<MessagePayload>,
) -> Result<impl IntoResponse, AppError> {
    let message_id = state.messages.create_message(body).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/messages/{}", message_id))],
        Json(json!({})),
    ))
}

/// Get a single message with its users embedded
pub async fn get_message(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = state.messages.get_message(&message_id).await?;

    Ok(Json(MessageResponse::from(message)))
}
