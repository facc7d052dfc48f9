//! HTTP request handlers.

pub mod registration_handler;
pub mod user_handler;

pub use registration_handler::registration_routes;
pub use user_handler::user_routes;
