//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::{MessageDraft, MessageFilterQuery, MessagePayload, UserDraft, UserPayload};
pub use response::{MessageResponse, UserResponse};
