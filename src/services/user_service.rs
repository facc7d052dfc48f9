//! User service - Read-only listing of registered users.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::PublicUserRecord;
use crate::errors::AppResult;
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List every registered user with credentials removed, in stored order.
    ///
    /// An absent store lists as empty. A corrupt one is an error rather
    /// than an empty list, so corruption is never mistaken for "no users".
    async fn list_users(&self) -> AppResult<Vec<PublicUserRecord>>;
}

/// Concrete implementation of UserService.
pub struct UserManager<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserManager<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: UserRepository> UserService for UserManager<R> {
    async fn list_users(&self) -> AppResult<Vec<PublicUserRecord>> {
        let users = self.repo.read_all().await?;
        Ok(users.into_iter().map(PublicUserRecord::from).collect())
    }
}
