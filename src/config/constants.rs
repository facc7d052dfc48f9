//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// User Store
// =============================================================================

/// Default location of the persisted user document
pub const DEFAULT_USER_STORE_PATH: &str = "users.json";

// =============================================================================
// Password Hashing (argon2id)
// =============================================================================

/// Default argon2 memory cost in KiB
pub const DEFAULT_HASH_MEMORY_KIB: u32 = 19_456;

/// Default argon2 iteration count
pub const DEFAULT_HASH_ITERATIONS: u32 = 2;

/// Default argon2 degree of parallelism
pub const DEFAULT_HASH_PARALLELISM: u32 = 1;

// =============================================================================
// Messages
// =============================================================================

pub const MSG_USERNAME_LENGTH: &str = "Username must be between 3 and 20 characters";
pub const MSG_INVALID_EMAIL: &str = "Invalid email format";
pub const MSG_PASSWORD_LENGTH: &str = "Password must be at least 8 characters long";
pub const MSG_USERNAME_TAKEN: &str = "Username already exists";
pub const MSG_EMAIL_TAKEN: &str = "Email already exists";
