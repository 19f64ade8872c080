//! # Domain Services
//!
//! Domain services encapsulate business rules that don't naturally belong to
//! a single entity.
//!
//! ## Services
//!
//! - **validation**: ordered, first-failure payload validation

mod validation;

pub use validation::*;
