//! Registration handler.

use axum::{extract::State, routing::post, Router};

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::domain::RegistrationInput;
use crate::errors::AppResult;
use crate::types::{Created, ErrorEnvelope, RegisterResponse};

/// Create registration routes
pub fn registration_routes() -> Router<AppState> {
    Router::new().route("/register", post(register))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/register",
    tag = "Registration",
    request_body = RegistrationInput,
    responses(
        (status = 201, description = "User registered successfully", body = RegisterResponse),
        (status = 400, description = "Validation failed", body = ErrorEnvelope),
        (status = 409, description = "Username or email already exists", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegistrationInput>,
) -> AppResult<Created<RegisterResponse>> {
    let user_id = state.registration_service.register(payload).await?;
    Ok(Created(RegisterResponse::new(user_id)))
}
