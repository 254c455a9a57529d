#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;

use contacts_api::api::routes::app_router;
use contacts_api::server::build_state;

pub const PASSWORD: &str = "secret-password";

/// Full application server, auth middleware included, backed by the test
/// database.
pub fn make_server(pool: PgPool) -> TestServer {
    TestServer::new(app_router(build_state(pool))).unwrap()
}

pub async fn register_user(server: &TestServer, id: &str) {
    let response = server
        .post("/api/users")
        .json(&json!({ "id": id, "name": id, "password": PASSWORD }))
        .await;
    response.assert_status_ok();
}

pub async fn login(server: &TestServer, id: &str) -> String {
    let response = server
        .post("/api/users/_login")
        .json(&json!({ "id": id, "password": PASSWORD }))
        .await;
    response.assert_status_ok();

    response.json::<Value>()["data"]["token"]
        .as_str()
        .unwrap()
        .to_string()
}

pub async fn register_and_login(server: &TestServer, id: &str) -> String {
    register_user(server, id).await;
    login(server, id).await
}

/// Creates a contact and returns its id.
pub async fn create_contact(server: &TestServer, token: &str, first_name: &str) -> String {
    let response = server
        .post("/api/contacts")
        .add_header("Authorization", token)
        .json(&json!({
            "first_name": first_name,
            "last_name": "Tester",
            "email": format!("{}@example.com", first_name.to_lowercase()),
            "phone": "+628123456"
        }))
        .await;
    response.assert_status_ok();

    response.json::<Value>()["data"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Creates an address under a contact and returns its id.
pub async fn create_address(server: &TestServer, token: &str, contact_id: &str) -> String {
    let response = server
        .post(&format!("/api/contacts/{contact_id}/addresses"))
        .add_header("Authorization", token)
        .json(&json!({
            "street": "Jalan Mawar 1",
            "city": "Jakarta",
            "province": "DKI Jakarta",
            "postal_code": "12345",
            "country": "Indonesia"
        }))
        .await;
    response.assert_status_ok();

    response.json::<Value>()["data"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}
