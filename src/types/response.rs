//! Response envelopes shared by the HTTP handlers.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::PublicUserRecord;

/// Body of a successful registration
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "User registered successfully")]
    pub message: String,
    /// Identifier assigned to the new user
    pub user_id: String,
}

impl RegisterResponse {
    pub fn new(user_id: String) -> Self {
        Self {
            success: true,
            message: "User registered successfully".to_string(),
            user_id,
        }
    }
}

/// Body of the user listing
#[derive(Debug, Serialize, ToSchema)]
pub struct UsersResponse {
    #[schema(example = true)]
    pub success: bool,
    pub users: Vec<PublicUserRecord>,
}

impl UsersResponse {
    pub fn new(users: Vec<PublicUserRecord>) -> Self {
        Self {
            success: true,
            users,
        }
    }
}

/// Failure envelope; `errors` is present for validation and conflict rejections
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorEnvelope {
    #[schema(example = false)]
    pub success: bool,
    #[schema(example = "Validation failed")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// Created response helper
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}
