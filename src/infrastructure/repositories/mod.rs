//! Repository Implementations
//!
//! Concrete implementations of the repository traits defined in the domain
//! layer.
//!
//! ## Available Repositories
//!
//! - **PgUserRepository** / **PgMessageRepository** - PostgreSQL via sqlx
//! - **InMemoryUserRepository** / **InMemoryMessageRepository** - process-local
//!   stores for tests and database-less runs
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{PgMessageRepository, PgUserRepository};
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let user_repo = PgUserRepository::new(pool.clone());
//!     let message_repo = PgMessageRepository::new(pool.clone());
//! }
//! ```

pub mod user_repository;
pub mod message_repository;
pub mod memory;

pub use user_repository::PgUserRepository;
pub use message_repository::PgMessageRepository;
pub use memory::{InMemoryMessageRepository, InMemoryUserRepository};
