//! Service Container - Centralized service access.
//!
//! Both services share one repository handle. The registrar, and with it
//! the write gate, exists once per container.

use std::sync::Arc;

use super::{Registrar, RegistrationService, UserManager, UserService};
use crate::config::Config;
use crate::infra::{JsonFileStore, UserRepository};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get registration service
    fn registration(&self) -> Arc<dyn RegistrationService>;

    /// Get user listing service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get the underlying user repository
    fn store(&self) -> Arc<dyn UserRepository>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    registration_service: Arc<dyn RegistrationService>,
    user_service: Arc<dyn UserService>,
    store: Arc<dyn UserRepository>,
}

impl Services {
    /// Create a service container with manually injected services
    pub fn new(
        registration_service: Arc<dyn RegistrationService>,
        user_service: Arc<dyn UserService>,
        store: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            registration_service,
            user_service,
            store,
        }
    }

    /// Wire both services over one repository
    pub fn from_repository<R: UserRepository + 'static>(repo: Arc<R>, config: &Config) -> Self {
        let registration_service = Arc::new(Registrar::new(repo.clone(), config.hash_cost));
        let user_service = Arc::new(UserManager::new(repo.clone()));

        Self {
            registration_service,
            user_service,
            store: repo,
        }
    }

    /// Create service container over the JSON file named in `config`
    pub fn from_config(config: &Config) -> Self {
        let store = Arc::new(JsonFileStore::new(config.store_path.clone()));
        Self::from_repository(store, config)
    }
}

impl ServiceContainer for Services {
    fn registration(&self) -> Arc<dyn RegistrationService> {
        self.registration_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn store(&self) -> Arc<dyn UserRepository> {
        self.store.clone()
    }
}
