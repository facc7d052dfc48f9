//! Registration service - signup workflow.
//!
//! validate -> check duplicates -> hash -> mint id -> append and persist.
//!
//! The read-append-write step runs under a process-wide write gate and
//! re-checks duplicates against the snapshot it extends, so two concurrent
//! signups for the same username or email cannot both be stored.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::duplicates::find_duplicates;
use crate::domain::{generate_user_id, HashCost, Password, RegistrationInput, UserRecord};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Registration service trait for dependency injection.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Register a new user and return the assigned id.
    ///
    /// # Errors
    /// - [`AppError::Validation`] with every violated field rule
    /// - [`AppError::Conflict`] with every taken field
    /// - any internal variant on storage or hashing failure
    async fn register(&self, input: RegistrationInput) -> AppResult<String>;
}

/// Concrete implementation of RegistrationService.
pub struct Registrar<R: UserRepository> {
    repo: Arc<R>,
    hash_cost: HashCost,
    write_gate: Mutex<()>,
}

impl<R: UserRepository> Registrar<R> {
    pub fn new(repo: Arc<R>, hash_cost: HashCost) -> Self {
        Self {
            repo,
            hash_cost,
            write_gate: Mutex::new(()),
        }
    }

    /// Hash off the async workers; argon2 is deliberately slow.
    async fn hash_password(&self, password: String) -> AppResult<String> {
        let cost = self.hash_cost;
        let hashed = tokio::task::spawn_blocking(move || Password::hash_with(&password, &cost))
            .await
            .map_err(|e| AppError::internal(format!("Hashing task failed: {}", e)))??;
        Ok(hashed.into_string())
    }
}

#[async_trait]
impl<R: UserRepository> RegistrationService for Registrar<R> {
    async fn register(&self, input: RegistrationInput) -> AppResult<String> {
        let errors = input.errors();
        if !errors.is_empty() {
            tracing::debug!(?errors, "registration rejected by validation");
            return Err(AppError::validation(errors));
        }

        let RegistrationInput {
            username,
            email,
            password,
        } = input;

        let duplicates = find_duplicates(&self.repo.read_all().await?, &username, &email);
        if !duplicates.is_empty() {
            tracing::info!(%username, ?duplicates, "registration rejected as duplicate");
            return Err(AppError::conflict(duplicates));
        }

        let password_hash = self.hash_password(password).await?;
        let user = UserRecord::new(generate_user_id(), username, email, password_hash);
        let id = user.id.clone();

        let _guard = self.write_gate.lock().await;
        let mut users = self.repo.read_all().await?;

        // Another signup may have landed since the first check.
        let duplicates = find_duplicates(&users, &user.username, &user.email);
        if !duplicates.is_empty() {
            tracing::info!(username = %user.username, ?duplicates, "lost registration race");
            return Err(AppError::conflict(duplicates));
        }

        tracing::info!(user_id = %id, username = %user.username, "user registered");
        users.push(user);
        self.repo.write_all(&users).await?;

        Ok(id)
    }
}
