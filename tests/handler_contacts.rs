mod common;

use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use sqlx::PgPool;

// ─── CREATE / GET ────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_contact_success(pool: PgPool) {
    let server = common::make_server(pool);
    let token = common::register_and_login(&server, "alice").await;

    let response = server
        .post("/api/contacts")
        .add_header("Authorization", token)
        .json(&json!({
            "first_name": "Joe",
            "last_name": "Doe",
            "email": "joe@example.com",
            "phone": "+62811111"
        }))
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["data"]["first_name"], "Joe");
    assert_eq!(body["data"]["email"], "joe@example.com");
    assert!(body["data"].get("id").is_some());
}

#[sqlx::test]
async fn test_create_contact_invalid_email_is_bad_request(pool: PgPool) {
    let server = common::make_server(pool);
    let token = common::register_and_login(&server, "alice").await;

    let response = server
        .post("/api/contacts")
        .add_header("Authorization", token)
        .json(&json!({ "first_name": "Joe", "email": "not-an-email" }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_create_contact_missing_first_name_is_bad_request(pool: PgPool) {
    let server = common::make_server(pool);
    let token = common::register_and_login(&server, "alice").await;

    let response = server
        .post("/api/contacts")
        .add_header("Authorization", token)
        .json(&json!({ "last_name": "Doe" }))
        .await;

    response.assert_status_bad_request();
    assert!(response.json::<Value>().get("error").is_some());
}

#[sqlx::test]
async fn test_create_response_carries_stored_timestamps(pool: PgPool) {
    let server = common::make_server(pool.clone());
    let token = common::register_and_login(&server, "alice").await;

    let response = server
        .post("/api/contacts")
        .add_header("Authorization", token)
        .json(&json!({ "first_name": "Joe" }))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    let contact_id = body["data"]["id"].as_str().unwrap().to_string();
    let echoed: DateTime<Utc> = body["data"]["created_at"].as_str().unwrap().parse().unwrap();

    let stored: DateTime<Utc> =
        sqlx::query_scalar("SELECT created_at FROM contacts WHERE id = $1::uuid")
            .bind(&contact_id)
            .fetch_one(&pool)
            .await
            .unwrap();

    assert_eq!(echoed, stored);
}

#[sqlx::test]
async fn test_get_contact_success(pool: PgPool) {
    let server = common::make_server(pool);
    let token = common::register_and_login(&server, "alice").await;
    let contact_id = common::create_contact(&server, &token, "Joe").await;

    let response = server
        .get(&format!("/api/contacts/{contact_id}"))
        .add_header("Authorization", token)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["id"], contact_id.as_str());
}

#[sqlx::test]
async fn test_get_contact_of_other_user_is_not_found(pool: PgPool) {
    let server = common::make_server(pool);

    let alice = common::register_and_login(&server, "alice").await;
    let contact_id = common::create_contact(&server, &alice, "Joe").await;

    let bob = common::register_and_login(&server, "bob").await;
    let response = server
        .get(&format!("/api/contacts/{contact_id}"))
        .add_header("Authorization", bob)
        .await;

    response.assert_status_not_found();
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_contact_success(pool: PgPool) {
    let server = common::make_server(pool);
    let token = common::register_and_login(&server, "alice").await;
    let contact_id = common::create_contact(&server, &token, "Joe").await;

    let response = server
        .put(&format!("/api/contacts/{contact_id}"))
        .add_header("Authorization", token)
        .json(&json!({
            "first_name": "Joseph",
            "last_name": "Doe",
            "email": "joseph@example.com",
            "phone": "+62822222"
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["first_name"], "Joseph");
}

#[sqlx::test]
async fn test_update_response_carries_stored_timestamps(pool: PgPool) {
    let server = common::make_server(pool.clone());
    let token = common::register_and_login(&server, "alice").await;
    let contact_id = common::create_contact(&server, &token, "Joe").await;

    let response = server
        .put(&format!("/api/contacts/{contact_id}"))
        .add_header("Authorization", token)
        .json(&json!({ "first_name": "Joseph" }))
        .await;
    response.assert_status_ok();

    let echoed: DateTime<Utc> = response.json::<Value>()["data"]["updated_at"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();

    let stored: DateTime<Utc> =
        sqlx::query_scalar("SELECT updated_at FROM contacts WHERE id = $1::uuid")
            .bind(&contact_id)
            .fetch_one(&pool)
            .await
            .unwrap();

    assert_eq!(echoed, stored);
}

#[sqlx::test]
async fn test_update_contact_invalid_email_leaves_row_unchanged(pool: PgPool) {
    let server = common::make_server(pool.clone());
    let token = common::register_and_login(&server, "alice").await;
    let contact_id = common::create_contact(&server, &token, "Joe").await;

    let response = server
        .put(&format!("/api/contacts/{contact_id}"))
        .add_header("Authorization", token)
        .json(&json!({ "first_name": "Changed", "email": "broken" }))
        .await;

    response.assert_status_bad_request();

    let (first_name, email): (String, Option<String>) = sqlx::query_as(
        "SELECT first_name, email FROM contacts WHERE id = $1::uuid",
    )
    .bind(&contact_id)
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(first_name, "Joe");
    assert_eq!(email.as_deref(), Some("joe@example.com"));
}

#[sqlx::test]
async fn test_update_missing_contact_is_not_found(pool: PgPool) {
    let server = common::make_server(pool);
    let token = common::register_and_login(&server, "alice").await;

    let response = server
        .put("/api/contacts/00000000-0000-0000-0000-000000000000")
        .add_header("Authorization", token)
        .json(&json!({ "first_name": "Ghost" }))
        .await;

    response.assert_status_not_found();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_contact_success(pool: PgPool) {
    let server = common::make_server(pool);
    let token = common::register_and_login(&server, "alice").await;
    let contact_id = common::create_contact(&server, &token, "Joe").await;

    let response = server
        .delete(&format!("/api/contacts/{contact_id}"))
        .add_header("Authorization", token.clone())
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"], true);

    let after = server
        .get(&format!("/api/contacts/{contact_id}"))
        .add_header("Authorization", token)
        .await;
    after.assert_status_not_found();
}

// ─── SEARCH ──────────────────────────────────────────────────────────────────

async fn seed_contacts(server: &axum_test::TestServer, token: &str, count: usize) {
    for i in 0..count {
        common::create_contact(server, token, &format!("Person{i:02}")).await;
    }
}

#[sqlx::test]
async fn test_search_pagination_math(pool: PgPool) {
    let server = common::make_server(pool);
    let token = common::register_and_login(&server, "alice").await;
    seed_contacts(&server, &token, 25).await;

    let response = server
        .get("/api/contacts?size=10&page=1")
        .add_header("Authorization", token.clone())
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["data"].as_array().unwrap().len(), 10);
    assert_eq!(body["paging"]["page"], 1);
    assert_eq!(body["paging"]["size"], 10);
    assert_eq!(body["paging"]["total_item"], 25);
    assert_eq!(body["paging"]["total_page"], 3);

    let last_page = server
        .get("/api/contacts?size=10&page=3")
        .add_header("Authorization", token)
        .await;

    let body = last_page.json::<Value>();
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(body["paging"]["page"], 3);
}

#[sqlx::test]
async fn test_search_defaults_to_page_1_size_10(pool: PgPool) {
    let server = common::make_server(pool);
    let token = common::register_and_login(&server, "alice").await;
    seed_contacts(&server, &token, 12).await;

    let response = server
        .get("/api/contacts")
        .add_header("Authorization", token)
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["data"].as_array().unwrap().len(), 10);
    assert_eq!(body["paging"]["page"], 1);
    assert_eq!(body["paging"]["size"], 10);
    assert_eq!(body["paging"]["total_item"], 12);
    assert_eq!(body["paging"]["total_page"], 2);
}

#[sqlx::test]
async fn test_search_with_extreme_page_and_size_is_safe(pool: PgPool) {
    let server = common::make_server(pool);
    let token = common::register_and_login(&server, "alice").await;
    common::create_contact(&server, &token, "Joe").await;

    let response = server
        .get(&format!("/api/contacts?page={}&size={}", i64::MAX, i64::MAX))
        .add_header("Authorization", token)
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
    assert_eq!(body["paging"]["size"], 1000);
    assert_eq!(body["paging"]["total_item"], 1);
}

#[sqlx::test]
async fn test_search_is_scoped_to_owner(pool: PgPool) {
    let server = common::make_server(pool);

    let alice = common::register_and_login(&server, "alice").await;
    common::create_contact(&server, &alice, "AliceFriend").await;

    let bob = common::register_and_login(&server, "bob").await;
    let response = server
        .get("/api/contacts")
        .add_header("Authorization", bob)
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
    assert_eq!(body["paging"]["total_item"], 0);
}

#[sqlx::test]
async fn test_search_name_filter_is_case_insensitive(pool: PgPool) {
    let server = common::make_server(pool);
    let token = common::register_and_login(&server, "alice").await;

    common::create_contact(&server, &token, "Budi").await;
    common::create_contact(&server, &token, "Siti").await;

    let response = server
        .get("/api/contacts?name=budi")
        .add_header("Authorization", token)
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["first_name"], "Budi");
}

#[sqlx::test]
async fn test_search_email_and_phone_filters(pool: PgPool) {
    let server = common::make_server(pool);
    let token = common::register_and_login(&server, "alice").await;

    common::create_contact(&server, &token, "Budi").await;
    common::create_contact(&server, &token, "Siti").await;

    let by_email = server
        .get("/api/contacts?email=siti@")
        .add_header("Authorization", token.clone())
        .await;
    assert_eq!(by_email.json::<Value>()["paging"]["total_item"], 1);

    let by_phone = server
        .get("/api/contacts?phone=628123")
        .add_header("Authorization", token)
        .await;
    assert_eq!(by_phone.json::<Value>()["paging"]["total_item"], 2);
}
