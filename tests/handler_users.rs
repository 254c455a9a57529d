mod common;

use serde_json::{Value, json};
use sqlx::PgPool;

// ─── REGISTER ────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_register_success(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .post("/api/users")
        .json(&json!({ "id": "alice", "name": "Alice", "password": "secret" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["data"]["id"], "alice");
    assert_eq!(body["data"]["name"], "Alice");
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("token").is_none());
}

#[sqlx::test]
async fn test_register_duplicate_id_is_conflict(pool: PgPool) {
    let server = common::make_server(pool);

    common::register_user(&server, "alice").await;

    let response = server
        .post("/api/users")
        .json(&json!({ "id": "alice", "name": "Other Alice", "password": "other" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
    assert!(response.json::<Value>().get("error").is_some());
}

#[sqlx::test]
async fn test_register_empty_fields_is_bad_request(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .post("/api/users")
        .json(&json!({ "id": "", "name": "", "password": "" }))
        .await;

    response.assert_status_bad_request();
}

// ─── LOGIN ───────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_login_returns_token(pool: PgPool) {
    let server = common::make_server(pool);

    common::register_user(&server, "alice").await;
    let token = common::login(&server, "alice").await;

    assert!(!token.is_empty());
}

#[sqlx::test]
async fn test_login_regenerates_token(pool: PgPool) {
    let server = common::make_server(pool);

    common::register_user(&server, "alice").await;
    let first = common::login(&server, "alice").await;
    let second = common::login(&server, "alice").await;

    assert_ne!(first, second);
}

#[sqlx::test]
async fn test_login_wrong_password_is_unauthorized(pool: PgPool) {
    let server = common::make_server(pool);

    common::register_user(&server, "alice").await;

    let response = server
        .post("/api/users/_login")
        .json(&json!({ "id": "alice", "password": "wrong" }))
        .await;

    response.assert_status_unauthorized();
}

#[sqlx::test]
async fn test_login_unknown_user_is_unauthorized(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .post("/api/users/_login")
        .json(&json!({ "id": "nobody", "password": "secret" }))
        .await;

    response.assert_status_unauthorized();
}

// ─── CURRENT ─────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_current_returns_profile(pool: PgPool) {
    let server = common::make_server(pool);

    let token = common::register_and_login(&server, "alice").await;

    let response = server
        .get("/api/users/_current")
        .add_header("Authorization", token)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["id"], "alice");
}

#[sqlx::test]
async fn test_current_without_token_is_unauthorized(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/api/users/_current").await;

    response.assert_status_unauthorized();
}

#[sqlx::test]
async fn test_current_with_bogus_token_is_unauthorized(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .get("/api/users/_current")
        .add_header("Authorization", "no-such-token")
        .await;

    response.assert_status_unauthorized();
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_name_only(pool: PgPool) {
    let server = common::make_server(pool);

    let token = common::register_and_login(&server, "alice").await;

    let response = server
        .patch("/api/users/_current")
        .add_header("Authorization", token.clone())
        .json(&json!({ "name": "Alice Renamed" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["name"], "Alice Renamed");

    // Unchanged password still logs in.
    let relogin = common::login(&server, "alice").await;
    assert!(!relogin.is_empty());
}

#[sqlx::test]
async fn test_update_password_rehashes(pool: PgPool) {
    let server = common::make_server(pool);

    let token = common::register_and_login(&server, "alice").await;

    let response = server
        .patch("/api/users/_current")
        .add_header("Authorization", token)
        .json(&json!({ "password": "brand-new-password" }))
        .await;

    response.assert_status_ok();

    // Old password is rejected, new one works.
    let old = server
        .post("/api/users/_login")
        .json(&json!({ "id": "alice", "password": common::PASSWORD }))
        .await;
    old.assert_status_unauthorized();

    let new = server
        .post("/api/users/_login")
        .json(&json!({ "id": "alice", "password": "brand-new-password" }))
        .await;
    new.assert_status_ok();
}

// ─── LOGOUT ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_logout_invalidates_token(pool: PgPool) {
    let server = common::make_server(pool);

    let token = common::register_and_login(&server, "alice").await;

    let response = server
        .delete("/api/users")
        .add_header("Authorization", token.clone())
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"], true);

    // The cleared token no longer authenticates.
    let after = server
        .get("/api/users/_current")
        .add_header("Authorization", token)
        .await;
    after.assert_status_unauthorized();
}
