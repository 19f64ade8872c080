//! Message Repository Implementation
//!
//! PostgreSQL implementation of message storage and filtered listing.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Message, MessageFilter, MessageRepository, StoreError};

/// Internal row type for message queries.
/// Maps to the messages table schema defined in the migration.
#[derive(Debug, sqlx::FromRow)]
struct MessageRow {
    id: String,
    from_id: String,
    to_id: String,
    text: String,
}

impl MessageRow {
    /// Converts database row to domain Message entity.
    fn into_message(self) -> Message {
        Message {
            id: self.id,
            from: self.from_id,
            to: self.to_id,
            text: self.text,
        }
    }
}

/// PostgreSQL message repository implementation.
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Creates a new PgMessageRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Message>, StoreError> {
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, from_id, to_id, text
            FROM messages
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(MessageRow::into_message))
    }

    /// A NULL parameter disables its constraint.
    async fn find_filtered(&self, filter: &MessageFilter) -> Result<Vec<Message>, StoreError> {
        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, from_id, to_id, text
            FROM messages
            WHERE ($1::text IS NULL OR from_id = $1)
              AND ($2::text IS NULL OR to_id = $2)
            ORDER BY seq
            "#,
        )
        .bind(filter.from.as_deref())
        .bind(filter.to.as_deref())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MessageRow::into_message).collect())
    }

    async fn create(&self, message: &Message) -> Result<Message, StoreError> {
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
            INSERT INTO messages (id, from_id, to_id, text)
            VALUES ($1, $2, $3, $4)
            RETURNING id, from_id, to_id, text
            "#,
        )
        .bind(&message.id)
        .bind(&message.from)
        .bind(&message.to)
        .bind(&message.text)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_message())
    }
}
