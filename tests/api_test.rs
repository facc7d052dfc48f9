//! Integration tests for the HTTP API.
//!
//! Each test drives the real router over a JSON store in a temporary
//! directory.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use user_registry::api::{create_router, AppState};
use user_registry::config::Config;
use user_registry::domain::HashCost;

// =============================================================================
// Test Helpers
// =============================================================================

fn test_config(dir: &TempDir) -> Config {
    Config {
        store_path: dir.path().join("users.json"),
        hash_cost: HashCost {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        },
        ..Config::default()
    }
}

fn app(dir: &TempDir) -> Router {
    create_router(AppState::from_config(&test_config(dir)))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn register(app: &Router, username: &str, email: &str, password: &str) -> (StatusCode, Value) {
    let request = Request::post("/api/register")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "username": username, "email": email, "password": password }).to_string(),
        ))
        .unwrap();
    send(app, request).await
}

async fn list_users(app: &Router) -> (StatusCode, Value) {
    send(app, Request::get("/api/users").body(Body::empty()).unwrap()).await
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn test_register_then_listed() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    let (status, body) = register(&app, "alice", "a@x.com", "password1").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User registered successfully");
    let user_id = body["userId"].as_str().unwrap().to_string();

    let (status, body) = list_users(&app).await;
    assert_eq!(status, StatusCode::OK);
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["id"], user_id.as_str());
    assert_eq!(users[0]["username"], "alice");
    assert_eq!(users[0]["email"], "a@x.com");
    assert!(users[0]["createdAt"].is_string());
}

#[tokio::test]
async fn test_listing_never_contains_credentials() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    register(&app, "alice", "a@x.com", "password1").await;
    register(&app, "bob", "b@y.com", "password2").await;

    let (_, body) = list_users(&app).await;
    for user in body["users"].as_array().unwrap() {
        let obj = user.as_object().unwrap();
        assert!(!obj.contains_key("passwordHash"));
        assert!(!obj.contains_key("password"));
    }
    let raw = body.to_string();
    assert!(!raw.contains("argon2"));
    assert!(!raw.contains("password1"));
}

#[tokio::test]
async fn test_stored_hash_is_not_plaintext() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    register(&app, "alice", "a@x.com", "password1").await;

    let document: Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("users.json")).unwrap())
            .unwrap();
    let hash = document[0]["passwordHash"].as_str().unwrap();
    assert_ne!(hash, "password1");
    assert!(user_registry::Password::from_hash(hash.to_string()).verify("password1"));
}

#[tokio::test]
async fn test_all_validation_errors_reported_together() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    let (status, body) = register(&app, "ab", "not-an-email", "1234567").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(
        body["errors"],
        json!([
            "Username must be between 3 and 20 characters",
            "Invalid email format",
            "Password must be at least 8 characters long"
        ])
    );
}

#[tokio::test]
async fn test_missing_fields_are_validation_errors() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    let request = Request::post("/api/register")
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_null_fields_are_validation_errors() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    let request = Request::post("/api/register")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "username": null, "email": "bad", "password": "short" }).to_string(),
        ))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(
        body["errors"],
        json!([
            "Username must be between 3 and 20 characters",
            "Invalid email format",
            "Password must be at least 8 characters long"
        ])
    );
}

#[tokio::test]
async fn test_email_without_public_domain_rejected() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    for email in ["a@b", "user@localhost", "x@[127.0.0.1]"] {
        let (status, body) = register(&app, "alice", email, "password1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", email);
        assert_eq!(body["errors"], json!(["Invalid email format"]));
    }

    let (_, body) = list_users(&app).await;
    assert!(body["users"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    let request = Request::post("/api/register")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_duplicate_username_is_conflict() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    let (status, _) = register(&app, "alice", "a@x.com", "password1").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = register(&app, "alice", "b@y.com", "password2").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "User already exists");
    assert_eq!(body["errors"], json!(["Username already exists"]));

    let (_, body) = list_users(&app).await;
    assert_eq!(body["users"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_duplicate_username_and_email_both_reported() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    register(&app, "alice", "a@x.com", "password1").await;
    let (status, body) = register(&app, "alice", "a@x.com", "password1").await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body["errors"],
        json!(["Username already exists", "Email already exists"])
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_duplicate_signups_store_one_record() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                register(&app, "alice", &format!("alice{}@x.com", i), "password1")
                    .await
                    .0
            })
        })
        .collect();

    let mut statuses = Vec::new();
    for handle in handles {
        statuses.push(handle.await.unwrap());
    }

    assert_eq!(statuses.iter().filter(|s| **s == StatusCode::CREATED).count(), 1);
    assert_eq!(statuses.iter().filter(|s| **s == StatusCode::CONFLICT).count(), 7);

    let (_, body) = list_users(&app).await;
    assert_eq!(body["users"].as_array().unwrap().len(), 1);
}

// =============================================================================
// Listing and Persistence
// =============================================================================

#[tokio::test]
async fn test_list_on_fresh_store_is_empty() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    let (status, body) = list_users(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "users": [] }));
}

#[tokio::test]
async fn test_listing_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    register(&app, "alice", "a@x.com", "password1").await;
    register(&app, "bob", "b@y.com", "password2").await;

    let first = list_users(&app).await;
    let second = list_users(&app).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_registrations_survive_restart() {
    let dir = TempDir::new().unwrap();

    let user_id = {
        let app = app(&dir);
        let (_, body) = register(&app, "alice", "a@x.com", "password1").await;
        body["userId"].as_str().unwrap().to_string()
    };

    let restarted = app(&dir);
    let (_, body) = list_users(&restarted).await;
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["id"], user_id.as_str());

    // Uniqueness still holds against the reloaded document.
    let (status, _) = register(&restarted, "alice", "c@z.com", "password3").await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_corrupt_store_is_opaque_internal_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("users.json");
    std::fs::write(&path, "[{\"id\": \"half-written").unwrap();
    let app = app(&dir);

    let (status, body) = list_users(&app).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false, "message": "Internal server error" }));

    let (status, _) = register(&app, "alice", "a@x.com", "password1").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    // The corrupt document is left for inspection, not overwritten.
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "[{\"id\": \"half-written"
    );
}

// =============================================================================
// Operational Endpoints
// =============================================================================

#[tokio::test]
async fn test_health_reflects_store_state() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    let (status, body) = send(&app, Request::get("/health").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    std::fs::write(dir.path().join("users.json"), "garbage").unwrap();
    let (status, body) = send(&app, Request::get("/health").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unhealthy");
}

#[tokio::test]
async fn test_openapi_document_served() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir);

    let (status, body) = send(
        &app,
        Request::get("/api-docs/openapi.json").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/register"].is_object());
    assert!(body["paths"]["/api/users"].is_object());
}
