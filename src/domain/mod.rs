//! Domain layer - Core registration entities and rules
//!
//! Everything here is free of I/O: the user record and its redacted view,
//! field validation, id generation and password hashing.

pub mod id;
pub mod password;
pub mod user;
pub mod validation;

pub use id::generate_user_id;
pub use password::{HashCost, Password};
pub use user::{PublicUserRecord, UserRecord};
pub use validation::{validate, RegistrationInput};
