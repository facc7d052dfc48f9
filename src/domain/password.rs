//! Password value object - one-way salted credential hashing.
//!
//! Hashes are argon2id PHC strings. The cost parameters are tunable
//! through [`HashCost`] so deployments can trade latency for resistance
//! to offline guessing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::config::{DEFAULT_HASH_ITERATIONS, DEFAULT_HASH_MEMORY_KIB, DEFAULT_HASH_PARALLELISM};
use crate::errors::{AppError, AppResult};

/// argon2 cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCost {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashCost {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_HASH_MEMORY_KIB,
            iterations: DEFAULT_HASH_ITERATIONS,
            parallelism: DEFAULT_HASH_PARALLELISM,
        }
    }
}

impl HashCost {
    fn argon2(&self) -> AppResult<Argon2<'static>> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| AppError::internal(format!("Invalid argon2 parameters: {}", e)))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// Hashed password. Never holds the plaintext.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash `plain_text` with the default cost.
    pub fn hash(plain_text: &str) -> AppResult<Self> {
        Self::hash_with(plain_text, &HashCost::default())
    }

    /// Hash `plain_text` under a fresh random salt.
    ///
    /// Hashing the same input twice yields different strings.
    ///
    /// # Errors
    /// Returns an internal error if the cost parameters are rejected or
    /// hashing fails.
    pub fn hash_with(plain_text: &str, cost: &HashCost) -> AppResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = cost
            .argon2()?
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Wrap a stored hash.
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }

    pub fn into_string(self) -> String {
        self.hash
    }

    /// Check `plain_text` against this hash.
    ///
    /// Parameters come from the PHC string itself, so hashes produced under
    /// an older cost still verify. Malformed hashes never verify.
    pub fn verify(&self, plain_text: &str) -> bool {
        match PasswordHash::new(&self.hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!("Stored password hash is malformed: {}", e);
                false
            }
        }
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}
