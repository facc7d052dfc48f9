//! Registration input and its structural field rules.

use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::config::{MSG_INVALID_EMAIL, MSG_PASSWORD_LENGTH, MSG_USERNAME_LENGTH};

/// Raw signup fields as received from a client.
///
/// Missing and `null` fields decode as empty strings so they fail their
/// rule instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct RegistrationInput {
    /// 3 to 20 characters
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 3, max = 20, message = "Username must be between 3 and 20 characters"))]
    #[schema(example = "alice", min_length = 3, max_length = 20)]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        email(message = "Invalid email format"),
        custom(function = "email_domain_is_public", message = "Invalid email format")
    )]
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// At least 8 characters
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
}

impl RegistrationInput {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Every violated rule, in field order. Empty means valid.
    pub fn errors(&self) -> Vec<String> {
        let Err(errors) = self.validate() else {
            return Vec::new();
        };
        let fields = errors.field_errors();

        [
            ("username", MSG_USERNAME_LENGTH),
            ("email", MSG_INVALID_EMAIL),
            ("password", MSG_PASSWORD_LENGTH),
        ]
        .into_iter()
        .filter(|(field, _)| fields.get(*field).is_some_and(|errs| !errs.is_empty()))
        .map(|(_, message)| message.to_string())
        .collect()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Domain must be a dotted name ending in an alphabetic (or punycode) TLD
/// of at least two characters. IP literals and bare hosts are rejected.
fn email_domain_is_public(email: &str) -> Result<(), ValidationError> {
    let domain = email.rsplit_once('@').map(|(_, d)| d).unwrap_or_default();
    let tld = match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !domain.starts_with('[') => tld,
        _ => return Err(ValidationError::new("email_domain")),
    };

    let alphabetic = tld.chars().count() >= 2 && tld.chars().all(char::is_alphabetic);
    let punycode = tld.len() > 4 && tld.to_ascii_lowercase().starts_with("xn--");
    if alphabetic || punycode {
        Ok(())
    } else {
        Err(ValidationError::new("email_domain"))
    }
}

/// Check all three fields independently; no short-circuit.
pub fn validate(username: &str, email: &str, password: &str) -> Vec<String> {
    RegistrationInput::new(username, email, password).errors()
}
