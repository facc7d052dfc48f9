//! Repository layer - Data access abstraction
//!
//! Services depend on the `UserRepository` trait; `JsonFileStore` is the
//! file-backed implementation used in production and integration tests.

mod user_repository;

pub use user_repository::{JsonFileStore, UserRepository};

#[cfg(test)]
pub use user_repository::MockUserRepository;
