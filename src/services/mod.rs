//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain rules and the user repository. They depend
//! on the `UserRepository` trait, not on the file store.

pub mod container;
mod duplicates;
mod registration_service;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use duplicates::find_duplicates;
pub use registration_service::{Registrar, RegistrationService};
pub use user_service::{UserManager, UserService};
