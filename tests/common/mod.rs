#![allow(dead_code)]

use axum::http::header::AUTHORIZATION;
use axum_test::TestServer;
use std::sync::Arc;
use token_login::infrastructure::persistence::InMemoryUserRepository;
use token_login::infrastructure::session::InMemorySessionStore;
use token_login::routes::router;
use token_login::state::AppState;

pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

pub fn create_test_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryUserRepository::seeded()),
        Arc::new(InMemorySessionStore::new()),
    )
}

/// Test server over the full router (minus trailing-slash normalization),
/// backed by the seeded in-memory user table.
pub fn make_server() -> TestServer {
    TestServer::new(router(create_test_state(), STATIC_DIR)).unwrap()
}

/// Logs in through `POST /token` and returns the issued token.
pub async fn login(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/token")
        .form(&[("username", username), ("password", password)])
        .await;

    response.assert_status_ok();

    let header = response
        .headers()
        .get(AUTHORIZATION)
        .expect("Authorization header on successful login")
        .to_str()
        .unwrap()
        .to_string();

    header
        .strip_prefix("Bearer ")
        .expect("Bearer scheme")
        .to_string()
}
