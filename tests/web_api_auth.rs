//! Web API Authentication Tests
//!
//! Integration tests for signup, login, logout, and session checking.

use axum::http::StatusCode;
use axum_test::TestServer;
use ladle::web::handlers::AppState;
use ladle::web::router::create_router;
use ladle::{Database, UserRepository};
use serde_json::{json, Value};
use std::sync::Arc;

/// Create a test server with an in-memory database.
async fn create_test_server() -> (TestServer, Arc<AppState>) {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let app_state = Arc::new(AppState::new(Arc::new(db)));

    let server = new_server_for(app_state.clone());

    (server, app_state)
}

/// Create an additional server (separate cookie jar) over shared state.
fn new_server_for(app_state: Arc<AppState>) -> TestServer {
    let router = create_router(app_state, &[]);
    let mut server = TestServer::new(router).expect("Failed to create test server");
    server.save_cookies();
    server
}

/// Helper to sign up a test user.
async fn signup_user(server: &TestServer, username: &str, password: &str) {
    server
        .post("/signup")
        .json(&json!({
            "username": username,
            "password": password
        }))
        .await
        .assert_status(StatusCode::CREATED);
}

// ============================================================================
// Signup Tests
// ============================================================================

#[tokio::test]
async fn test_signup_success() {
    let (server, _state) = create_test_server().await;

    let response = server
        .post("/signup")
        .json(&json!({
            "username": "alice",
            "password": "pw1"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["message"], "User created successfully.");
}

#[tokio::test]
async fn test_signup_with_profile_fields() {
    let (server, state) = create_test_server().await;

    server
        .post("/signup")
        .json(&json!({
            "username": "alice",
            "password": "pw1",
            "bio": "Home cook",
            "image_url": "https://example.com/alice.png"
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let repo = UserRepository::new(state.db.pool());
    let user = repo.get_by_username("alice").await.unwrap().unwrap();
    assert_eq!(user.bio, Some("Home cook".to_string()));
    assert_eq!(user.image_url, Some("https://example.com/alice.png".to_string()));
}

#[tokio::test]
async fn test_signup_duplicate_username() {
    let (server, state) = create_test_server().await;

    signup_user(&server, "alice", "pw1").await;

    let response = server
        .post("/signup")
        .json(&json!({
            "username": "alice",
            "password": "pw2"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert_eq!(body["message"], "Username already exists.");

    // No new user was created
    let repo = UserRepository::new(state.db.pool());
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_signup_missing_username() {
    let (server, _state) = create_test_server().await;

    let response = server
        .post("/signup")
        .json(&json!({
            "password": "pw1"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert_eq!(body["message"], "Username and password are required.");
}

#[tokio::test]
async fn test_signup_empty_password() {
    let (server, _state) = create_test_server().await;

    let response = server
        .post("/signup")
        .json(&json!({
            "username": "alice",
            "password": ""
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_signup_stores_hash_not_plaintext() {
    let (server, state) = create_test_server().await;

    signup_user(&server, "alice", "pw1").await;

    let repo = UserRepository::new(state.db.pool());
    let user = repo.get_by_username("alice").await.unwrap().unwrap();

    assert_ne!(user.password, "pw1");
    assert!(user.password.starts_with("$argon2id$"));
    assert!(ladle::verify_password("pw1", &user.password).is_ok());
}

// ============================================================================
// Login Tests
// ============================================================================

#[tokio::test]
async fn test_login_success() {
    let (server, _state) = create_test_server().await;

    signup_user(&server, "alice", "pw1").await;

    let response = server
        .post("/login")
        .json(&json!({
            "username": "alice",
            "password": "pw1"
        }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["username"], "alice");
}

#[tokio::test]
async fn test_login_establishes_session() {
    let (server, _state) = create_test_server().await;

    signup_user(&server, "alice", "pw1").await;
    server
        .post("/login")
        .json(&json!({
            "username": "alice",
            "password": "pw1"
        }))
        .await
        .assert_status_ok();

    let response = server.get("/check_session").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["username"], "alice");
    assert!(body["id"].is_i64());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let (server, state) = create_test_server().await;

    signup_user(&server, "alice", "pw1").await;

    let response = server
        .post("/login")
        .json(&json!({
            "username": "alice",
            "password": "wrong"
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);

    let body: Value = response.json();
    assert_eq!(body["message"], "Invalid username or password.");

    // No session was established
    assert_eq!(state.sessions.read().await.session_count(), 0);
}

#[tokio::test]
async fn test_login_unknown_user() {
    let (server, _state) = create_test_server().await;

    let response = server
        .post("/login")
        .json(&json!({
            "username": "nobody",
            "password": "pw1"
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_missing_fields() {
    let (server, _state) = create_test_server().await;

    let response = server
        .post("/login")
        .json(&json!({
            "username": "alice"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert_eq!(body["message"], "Username and password are required.");
}

// ============================================================================
// Session Check Tests
// ============================================================================

#[tokio::test]
async fn test_check_session_without_cookie() {
    let (server, _state) = create_test_server().await;

    let response = server.get("/check_session").await;

    response.assert_status(StatusCode::UNAUTHORIZED);

    let body: Value = response.json();
    assert_eq!(body["message"], "Unauthorized.");
}

#[tokio::test]
async fn test_check_session_returns_same_identity() {
    let (server, state) = create_test_server().await;

    signup_user(&server, "alice", "pw1").await;
    server
        .post("/login")
        .json(&json!({"username": "alice", "password": "pw1"}))
        .await
        .assert_status_ok();

    let repo = UserRepository::new(state.db.pool());
    let user = repo.get_by_username("alice").await.unwrap().unwrap();

    let body: Value = server.get("/check_session").await.json();
    assert_eq!(body["id"], user.id);
    assert_eq!(body["username"], "alice");
}

// ============================================================================
// Logout Tests
// ============================================================================

#[tokio::test]
async fn test_logout_destroys_session() {
    let (server, _state) = create_test_server().await;

    signup_user(&server, "alice", "pw1").await;
    server
        .post("/login")
        .json(&json!({"username": "alice", "password": "pw1"}))
        .await
        .assert_status_ok();

    let response = server.delete("/logout").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["message"], "Logged out successfully.");

    // Session is gone
    server
        .get("/check_session")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let (server, _state) = create_test_server().await;

    signup_user(&server, "alice", "pw1").await;
    server
        .post("/login")
        .json(&json!({"username": "alice", "password": "pw1"}))
        .await
        .assert_status_ok();

    server.delete("/logout").await.assert_status_ok();
    server.delete("/logout").await.assert_status_ok();

    server
        .get("/check_session")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_without_session() {
    let (server, _state) = create_test_server().await;

    // Never logged in; logout still succeeds
    server.delete("/logout").await.assert_status_ok();
}
