//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::api::handlers::{registration_handler, user_handler};
use crate::domain::{PublicUserRecord, RegistrationInput};
use crate::types::{ErrorEnvelope, RegisterResponse, UsersResponse};

/// OpenAPI documentation for the registration service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Registry",
        version = "0.1.0",
        description = "Account registration backed by a single JSON document",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        registration_handler::register,
        user_handler::list_users,
    ),
    components(
        schemas(
            RegistrationInput,
            PublicUserRecord,
            RegisterResponse,
            UsersResponse,
            ErrorEnvelope,
        )
    ),
    tags(
        (name = "Registration", description = "New user signup"),
        (name = "Users", description = "Registered user listing")
    )
)]
pub struct ApiDoc;
