//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::UserRepository;
use crate::services::{RegistrationService, ServiceContainer, Services, UserService};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Signup workflow
    pub registration_service: Arc<dyn RegistrationService>,
    /// Redacted user listing
    pub user_service: Arc<dyn UserService>,
    /// Raw repository, used for health checks
    pub store: Arc<dyn UserRepository>,
}

impl AppState {
    /// Create application state over the store named in `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::from_services(&Services::from_config(config))
    }

    /// Create application state from a service container.
    pub fn from_services(services: &impl ServiceContainer) -> Self {
        Self {
            registration_service: services.registration(),
            user_service: services.users(),
            store: services.store(),
        }
    }
}
