//! # Sup Server Library
//!
//! This crate provides a small JSON REST service managing users and the
//! messages they send each other:
//! - RESTful HTTP API endpoints for `/users` and `/messages`
//! - Ordered, first-failure validation of every create/update payload
//! - Referential checks on message senders and recipients
//! - Messages returned with their users embedded
//! - PostgreSQL or in-memory storage
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Entities, repository traits and validation
//! - **Application Layer**: Business logic services and DTOs
//! - **Infrastructure Layer**: Database, in-memory store and metrics
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! sup_server/
//! +-- config/         Configuration management
//! +-- domain/         Entities, repository traits, validation
//! +-- application/    Application services and DTOs
//! +-- infrastructure/ Database, in-memory store, metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors, ids)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
