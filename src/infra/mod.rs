//! Infrastructure layer - Persistence of the user collection.

pub mod repositories;

pub use repositories::{JsonFileStore, UserRepository};

#[cfg(test)]
pub use repositories::MockUserRepository;
