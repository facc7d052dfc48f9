//! Duplicate detection for usernames and emails.

use crate::config::{MSG_EMAIL_TAKEN, MSG_USERNAME_TAKEN};
use crate::domain::UserRecord;

/// Collisions of `username` and `email` against `users`.
///
/// Each field is compared independently with exact, case-sensitive
/// equality, so one record may collide on a single field. Both messages are
/// returned when both fields are taken.
pub fn find_duplicates(users: &[UserRecord], username: &str, email: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if users.iter().any(|u| u.username == username) {
        errors.push(MSG_USERNAME_TAKEN.to_string());
    }
    if users.iter().any(|u| u.email == email) {
        errors.push(MSG_EMAIL_TAKEN.to_string());
    }
    errors
}
