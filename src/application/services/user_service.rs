//! User Service
//!
//! Handles user management operations.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::UserPayload;
use crate::domain::{StoreError, User, UserRepository, ValidationError};
use crate::shared::id::IdGenerator;

/// User service trait
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate and create a user with a fresh id, returning that id
    async fn create_user(&self, payload: UserPayload) -> Result<String, UserError>;

    /// Get user by ID
    async fn get_user(&self, user_id: &str) -> Result<UserDto, UserError>;

    /// List every user in insertion order
    async fn list_users(&self) -> Result<Vec<UserDto>, UserError>;

    /// Replace the user's username, or create the user under `user_id`
    async fn upsert_user(&self, user_id: &str, payload: UserPayload) -> Result<(), UserError>;

    /// Delete user account
    async fn delete_user(&self, user_id: &str) -> Result<(), UserError>;
}

/// User data transfer object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDto {
    pub id: String,
    pub username: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// User service errors
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("User not found")]
    NotFound,

    #[error("Username already taken")]
    UsernameTaken,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<StoreError> for UserError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(_) => UserError::UsernameTaken,
            StoreError::Backend(msg) => UserError::Storage(msg),
        }
    }
}

/// UserService implementation
pub struct UserServiceImpl<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    id_generator: Arc<IdGenerator>,
}

impl<U> UserServiceImpl<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, id_generator: Arc<IdGenerator>) -> Self {
        Self {
            user_repo,
            id_generator,
        }
    }
}

#[async_trait]
impl<U> UserService for UserServiceImpl<U>
where
    U: UserRepository + 'static,
{
    async fn create_user(&self, payload: UserPayload) -> Result<String, UserError> {
        let draft = payload.into_draft()?;

        let user = User::new(self.id_generator.generate(), draft.username);
        let created = self.user_repo.create(&user).await?;

        tracing::info!(user_id = %created.id, username = %created.username, "User created");
        Ok(created.id)
    }

    async fn get_user(&self, user_id: &str) -> Result<UserDto, UserError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::NotFound)?;

        Ok(UserDto::from(user))
    }

    async fn list_users(&self) -> Result<Vec<UserDto>, UserError> {
        let users = self.user_repo.find_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    async fn upsert_user(&self, user_id: &str, payload: UserPayload) -> Result<(), UserError> {
        let draft = payload.into_draft()?;

        self.user_repo
            .upsert(&User::new(user_id, draft.username))
            .await?;

        tracing::info!(user_id = %user_id, "User upserted");
        Ok(())
    }

    async fn delete_user(&self, user_id: &str) -> Result<(), UserError> {
        if !self.user_repo.delete(user_id).await? {
            return Err(UserError::NotFound);
        }

        tracing::info!(user_id = %user_id, "User deleted");
        Ok(())
    }
}
