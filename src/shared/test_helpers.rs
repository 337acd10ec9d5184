#[cfg(test)]
use std::time::Duration;

#[cfg(test)]
use axum_test::TestServer;
#[cfg(test)]
use serde_json::{json, Value};

#[cfg(test)]
use crate::core::config::AuthConfig;
#[cfg(test)]
use crate::core::router::create_router;
#[cfg(test)]
use crate::core::state::AppServices;

#[cfg(test)]
pub const TEST_PASSWORD: &str = "securepass123";

#[cfg(test)]
pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "test-secret-that-is-at-least-32-bytes".to_string(),
        issuer: "mentorship-hub".to_string(),
        access_token_ttl: Duration::from_secs(300),
        refresh_token_ttl: Duration::from_secs(86400),
        leeway: Duration::from_secs(30),
    }
}

/// Full router over the in-memory store
#[cfg(test)]
pub fn test_server() -> (TestServer, AppServices) {
    let services = AppServices::in_memory(test_auth_config());
    let server = TestServer::new(create_router(&services)).unwrap();
    (server, services)
}

#[cfg(test)]
pub fn registration_body(username: &str) -> Value {
    json!({
        "username": username,
        "email": format!("{}@test.com", username),
        "first_name": "",
        "last_name": "",
        "password": TEST_PASSWORD,
        "password2": TEST_PASSWORD,
    })
}

/// Registers `username` and returns an access token for it
#[cfg(test)]
pub async fn register_and_login(server: &TestServer, username: &str) -> String {
    server
        .post("/api/auth/register/")
        .json(&registration_body(username))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let body: Value = server
        .post("/api/auth/login/")
        .json(&json!({ "username": username, "password": TEST_PASSWORD }))
        .await
        .json();

    body["data"]["access"]
        .as_str()
        .map(str::to_string)
        .unwrap()
}

#[cfg(test)]
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
