//! In-Memory Repositories
//!
//! Process-local implementations of the repository traits. Documents live in
//! insertion-ordered vectors behind a `parking_lot::RwLock`; each call takes
//! the lock once, so single operations are atomic.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{Message, MessageFilter, MessageRepository, StoreError, User, UserRepository};

/// In-memory user store with unique ids and usernames.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn username_taken(users: &[User], username: &str, except_id: &str) -> bool {
    users
        .iter()
        .any(|u| u.username == username && u.id != except_id)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<User>, StoreError> {
        Ok(self
            .users
            .read()
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.read().clone())
    }

    async fn create(&self, user: &User) -> Result<User, StoreError> {
        let mut users = self.users.write();

        if users.iter().any(|u| u.id == user.id) {
            return Err(StoreError::Conflict(format!("duplicate id {}", user.id)));
        }
        if username_taken(&users, &user.username, &user.id) {
            return Err(StoreError::Conflict(format!(
                "duplicate username {}",
                user.username
            )));
        }

        users.push(user.clone());
        Ok(user.clone())
    }

    async fn upsert(&self, user: &User) -> Result<(), StoreError> {
        let mut users = self.users.write();

        if username_taken(&users, &user.username, &user.id) {
            return Err(StoreError::Conflict(format!(
                "duplicate username {}",
                user.username
            )));
        }

        match users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => existing.username = user.username.clone(),
            None => users.push(user.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut users = self.users.write();

        match users.iter().position(|u| u.id == id) {
            Some(index) => {
                users.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// In-memory message store.
#[derive(Debug, Default)]
pub struct InMemoryMessageRepository {
    messages: RwLock<Vec<Message>>,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Message>, StoreError> {
        Ok(self.messages.read().iter().find(|m| m.id == id).cloned())
    }

    async fn find_filtered(&self, filter: &MessageFilter) -> Result<Vec<Message>, StoreError> {
        Ok(self
            .messages
            .read()
            .iter()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect())
    }

    async fn create(&self, message: &Message) -> Result<Message, StoreError> {
        let mut messages = self.messages.write();

        if messages.iter().any(|m| m.id == message.id) {
            return Err(StoreError::Conflict(format!("duplicate id {}", message.id)));
        }

        messages.push(message.clone());
        Ok(message.clone())
    }
}
