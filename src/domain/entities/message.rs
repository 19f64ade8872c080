//! Message entity and repository trait.
//!
//! Maps to the `messages` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::StoreError;

/// Represents a message sent from one user to another.
///
/// Maps to the `messages` table:
/// - id: TEXT PRIMARY KEY (store-assigned)
/// - from_id: TEXT NOT NULL (sender user id, no foreign key)
/// - to_id: TEXT NOT NULL (recipient user id, no foreign key)
/// - text: TEXT NOT NULL
/// - seq: BIGSERIAL (insertion order, never exposed)
///
/// The user references are checked when the message is created only.
/// Deleting a user later leaves the stored id dangling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Opaque identifier (primary key)
    pub id: String,

    /// Sender user id
    pub from: String,

    /// Recipient user id
    pub to: String,

    /// Message body
    pub text: String,
}

impl Message {
    /// Ids of the users this message points at, sender first.
    pub fn participants(&self) -> [&str; 2] {
        [&self.from, &self.to]
    }
}

/// Exact-match constraints applied when listing messages.
///
/// Absent constraints match everything; present ones are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageFilter {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl MessageFilter {
    /// Check whether a message satisfies every present constraint.
    pub fn matches(&self, message: &Message) -> bool {
        self.from.as_deref().map_or(true, |from| message.from == from)
            && self.to.as_deref().map_or(true, |to| message.to == to)
    }
}

/// Repository trait for Message data access operations.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find a message by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Message>, StoreError>;

    /// List messages matching the filter, in insertion order.
    async fn find_filtered(&self, filter: &MessageFilter) -> Result<Vec<Message>, StoreError>;

    /// Insert a new message.
    async fn create(&self, message: &Message) -> Result<Message, StoreError>;
}
