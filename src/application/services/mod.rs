//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **UserService**: create, fetch, list, upsert and delete users
//! - **MessageService**: create, fetch and filter messages, resolving their users

pub mod user_service;
pub mod message_service;

// Re-export user service types
pub use user_service::{UserService, UserServiceImpl, UserDto, UserError};

// Re-export message service types
pub use message_service::{MessageService, MessageServiceImpl, MessageDto, MessageError};
