//! User identifier generation.

use uuid::Uuid;

/// New opaque user id.
///
/// UUIDv7: a millisecond Unix timestamp followed by random bits, so ids
/// minted at different instants differ and ids minted in the same
/// millisecond differ with overwhelming probability. No lookup against
/// existing ids is made.
pub fn generate_user_id() -> String {
    Uuid::now_v7().to_string()
}
