#![allow(dead_code)]

use clerk_sdk::{ClerkClient, Config};
use wiremock::MockServer;

pub const SECRET_KEY: &str = "sk_test_123";

/// Start a mock API server and a client pointed at it
pub async fn setup() -> (MockServer, ClerkClient) {
    let server = MockServer::start().await;
    let config = Config::new(SECRET_KEY).with_api_url(format!("{}/v1", server.uri()));
    let client = ClerkClient::new(config).unwrap();
    (server, client)
}

pub fn user_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "object": "user",
        "first_name": "Ada",
        "primary_email_address_id": "idn_1",
        "email_addresses": [{"id": "idn_1", "object": "email_address", "email_address": "ada@example.com"}],
        "public_metadata": {},
        "private_metadata": {},
        "unsafe_metadata": {},
        "created_at": 1700000000000i64,
        "updated_at": 1700000000000i64
    })
}
