//! User domain entity and its public (redacted) view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A registered account as persisted in the user document.
///
/// `id`, `created_at` are fixed at creation and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub username: String,
    pub email: String,
    /// argon2 PHC string. Older documents store it under `password`.
    #[serde(alias = "password")]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Create a new record stamped with the current time
    pub fn new(id: String, username: String, email: String, password_hash: String) -> Self {
        Self {
            id,
            username,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

/// User view safe to return to clients; carries no credential field at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicUserRecord {
    /// Opaque user identifier
    #[schema(example = "01929a3e-5c4f-7b2a-9d3e-8f1a2b3c4d5e")]
    pub id: String,
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<UserRecord> for PublicUserRecord {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}
