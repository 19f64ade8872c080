//! # Domain Layer
//!
//! The domain layer contains the core business rules of the service.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: User and Message plus their repository traits
//! - **services**: payload validation shared by every resource
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Validation is pure and needs no synchronization

pub mod entities;
pub mod services;

// Re-export commonly used types
pub use entities::*;
pub use services::*;
