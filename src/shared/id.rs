//! Identifier Generator
//!
//! Time-ordered opaque identifiers for newly created documents.

use uuid::Uuid;

/// Generates store identifiers: UUIDv7 as 32 lowercase hex characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdGenerator;

impl IdGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a new identifier
    pub fn generate(&self) -> String {
        Uuid::now_v7().simple().to_string()
    }
}
