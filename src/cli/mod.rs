//! CLI module - Command-line interface for the application.
//!
//! - `serve` - Start the HTTP server
//! - `users` - Dump the redacted user list

pub mod args;

pub use args::{Cli, Commands};
