//! User Registry - account registration over a single JSON document.
//!
//! Accepts signups, validates and deduplicates them against the persisted
//! user set, stores an argon2 hash of the password and lists registered
//! users with credentials removed.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User record, validation, id generation, password hashing
//! - **services**: Registration and listing use cases
//! - **infra**: JSON file user store
//! - **api**: HTTP handlers and routes
//! - **types**: Response envelopes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve --port 3000
//!
//! # Print registered users
//! cargo run -- --store users.json users
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, PublicUserRecord, RegistrationInput, UserRecord};
pub use errors::{AppError, AppResult};
pub use infra::{JsonFileStore, UserRepository};
