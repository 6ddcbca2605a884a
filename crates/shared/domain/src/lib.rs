//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The storage crate maps these types to and from database rows.

pub mod error;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use user::User;
