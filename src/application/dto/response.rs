//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::application::services::{MessageDto, UserDto};

/// User response, also used for users embedded in messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
}

impl From<UserDto> for UserResponse {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            username: dto.username,
        }
    }
}

/// Message response with `from`/`to` resolved to users.
///
/// A reference to a user that no longer exists serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub from: Option<UserResponse>,
    pub to: Option<UserResponse>,
    pub text: String,
}

impl From<MessageDto> for MessageResponse {
    fn from(dto: MessageDto) -> Self {
        Self {
            id: dto.id,
            from: dto.from.map(UserResponse::from),
            to: dto.to.map(UserResponse::from),
            text: dto.text,
        }
    }
}
