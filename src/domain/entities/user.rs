//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::StoreError;

/// Represents a user account.
///
/// Maps to the `users` table:
/// - id: TEXT PRIMARY KEY (store-assigned, or client-assigned on upsert)
/// - username: TEXT NOT NULL UNIQUE
/// - seq: BIGSERIAL (insertion order, never exposed)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier (primary key)
    pub id: String,

    /// Username (unique across all users)
    pub username: String,
}

impl User {
    /// Build a user from its parts.
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
        }
    }
}

/// Repository trait for User data access operations.
///
/// Implementations of this trait handle the actual storage interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;

    /// Fetch every user whose id is in `ids`, in one round trip.
    ///
    /// Ids with no stored user are skipped; the result order is unspecified.
    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<User>, StoreError>;

    /// List every user in insertion order.
    async fn find_all(&self) -> Result<Vec<User>, StoreError>;

    /// Insert a new user. Fails with `StoreError::Conflict` on a duplicate
    /// id or username.
    async fn create(&self, user: &User) -> Result<User, StoreError>;

    /// Insert the user under its own id, or replace the username of the
    /// user already stored under that id.
    async fn upsert(&self, user: &User) -> Result<(), StoreError>;

    /// Delete a user by id. Returns `false` when nothing was stored under it.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;

    /// Cheap round trip used by readiness probes.
    async fn ping(&self) -> Result<(), StoreError>;
}
