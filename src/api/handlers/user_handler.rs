//! User listing handler.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::AppState;
use crate::errors::AppResult;
use crate::types::{ErrorEnvelope, UsersResponse};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", get(list_users))
}

/// List registered users without credentials
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "Registered users", body = UsersResponse),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<UsersResponse>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(UsersResponse::new(users)))
}
