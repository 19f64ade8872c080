//! # Domain Entities
//!
//! Core domain entities and the repository traits that persist them.
//!
//! - **User**: an account identified by a unique username
//! - **Message**: text sent from one user to another
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod user;
mod message;

pub use user::{User, UserRepository};
pub use message::{Message, MessageFilter, MessageRepository};

/// Failure reported by a repository implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Any other storage fault.
    #[error("Storage backend error: {0}")]
    Backend(String),
}
