//! Runtime configuration.
//!
//! `settings` reads the environment; `constants` holds defaults, validation
//! limits and the messages returned to clients.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
