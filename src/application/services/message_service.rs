//! Message Service
//!
//! Handles message creation and retrieval. Stored messages reference users by
//! id; every read resolves those ids against the current user store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::MessagePayload;
use crate::application::services::UserDto;
use crate::domain::{
    Message, MessageFilter, MessageRepository, StoreError, UserRepository, ValidationError,
};
use crate::shared::id::IdGenerator;

/// Message service trait
#[async_trait]
pub trait MessageService: Send + Sync {
    /// Validate and store a message, returning its id
    async fn create_message(&self, payload: MessagePayload) -> Result<String, MessageError>;

    /// Get a single message with its users resolved
    async fn get_message(&self, message_id: &str) -> Result<MessageDto, MessageError>;

    /// List messages matching the filter, in creation order
    async fn list_messages(&self, filter: MessageFilter) -> Result<Vec<MessageDto>, MessageError>;
}

/// Message data transfer object.
///
/// `from`/`to` are `None` when the referenced user has since been deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDto {
    pub id: String,
    pub from: Option<UserDto>,
    pub to: Option<UserDto>,
    pub text: String,
}

impl MessageDto {
    fn resolve(message: Message, users: &HashMap<String, UserDto>) -> Self {
        Self {
            from: users.get(&message.from).cloned(),
            to: users.get(&message.to).cloned(),
            id: message.id,
            text: message.text,
        }
    }
}

/// Message service errors
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Message not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<StoreError> for MessageError {
    fn from(err: StoreError) -> Self {
        MessageError::Storage(err.to_string())
    }
}

/// MessageService implementation
pub struct MessageServiceImpl<M, U>
where
    M: MessageRepository,
    U: UserRepository,
{
    message_repo: Arc<M>,
    user_repo: Arc<U>,
    id_generator: Arc<IdGenerator>,
}

impl<M, U> MessageServiceImpl<M, U>
where
    M: MessageRepository,
    U: UserRepository,
{
    pub fn new(message_repo: Arc<M>, user_repo: Arc<U>, id_generator: Arc<IdGenerator>) -> Self {
        Self {
            message_repo,
            user_repo,
            id_generator,
        }
    }

    /// Fail with `IncorrectFieldValue(field)` unless `user_id` is a stored user.
    async fn require_user(&self, field: &str, user_id: &str) -> Result<(), MessageError> {
        match self.user_repo.find_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(ValidationError::IncorrectFieldValue(field.into()).into()),
        }
    }

    /// Replace user ids with the users they currently point at.
    ///
    /// All referenced users are fetched in a single store call.
    async fn resolve(&self, messages: Vec<Message>) -> Result<Vec<MessageDto>, MessageError> {
        let mut ids: Vec<String> = messages
            .iter()
            .flat_map(Message::participants)
            .map(str::to_owned)
            .collect();
        ids.sort_unstable();
        ids.dedup();

        let users: HashMap<String, UserDto> = if ids.is_empty() {
            HashMap::new()
        } else {
            self.user_repo
                .find_by_ids(&ids)
                .await?
                .into_iter()
                .map(|user| (user.id.clone(), UserDto::from(user)))
                .collect()
        };

        if users.len() < ids.len() {
            tracing::debug!(
                missing = ids.len() - users.len(),
                "Messages reference deleted users"
            );
        }

        Ok(messages
            .into_iter()
            .map(|message| MessageDto::resolve(message, &users))
            .collect())
    }
}

#[async_trait]
impl<M, U> MessageService for MessageServiceImpl<M, U>
where
    M: MessageRepository + 'static,
    U: UserRepository + 'static,
{
    async fn create_message(&self, payload: MessagePayload) -> Result<String, MessageError> {
        let draft = payload.into_draft()?;

        // Not atomic with the insert: a user deleted in between leaves a
        // dangling reference, which reads tolerate.
        self.require_user("from", &draft.from).await?;
        self.require_user("to", &draft.to).await?;

        let message = Message {
            id: self.id_generator.generate(),
            from: draft.from,
            to: draft.to,
            text: draft.text,
        };
        let created = self.message_repo.create(&message).await?;

        tracing::info!(
            message_id = %created.id,
            from = %created.from,
            to = %created.to,
            "Message created"
        );
        Ok(created.id)
    }

    async fn get_message(&self, message_id: &str) -> Result<MessageDto, MessageError> {
        let message = self
            .message_repo
            .find_by_id(message_id)
            .await?
            .ok_or(MessageError::NotFound)?;

        let mut resolved = self.resolve(vec![message]).await?;
        resolved.pop().ok_or(MessageError::NotFound)
    }

    async fn list_messages(&self, filter: MessageFilter) -> Result<Vec<MessageDto>, MessageError> {
        let messages = self.message_repo.find_filtered(&filter).await?;

        self.resolve(messages).await
    }
}
