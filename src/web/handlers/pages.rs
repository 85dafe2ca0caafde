//! Protected page handlers.
//!
//! Both pages sit behind [`crate::web::middleware::bearer_auth`], which puts
//! the authenticated [`UserRecord`] into request extensions.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Extension, response::IntoResponse};
use tracing::debug;

use crate::domain::entities::UserRecord;

#[derive(Template, WebTemplate)]
#[template(path = "secret.html")]
struct SecretTemplate {}

#[derive(Template, WebTemplate)]
#[template(path = "test.html")]
struct TestTemplate {}

/// Renders the secret page.
///
/// # Endpoint
///
/// `GET /secret/`
pub async fn secret_handler(Extension(user): Extension<UserRecord>) -> impl IntoResponse {
    debug!(username = %user.username, "Serving secret page");
    SecretTemplate {}
}

/// Renders the test page.
///
/// # Endpoint
///
/// `GET /test/`
pub async fn test_handler(Extension(user): Extension<UserRecord>) -> impl IntoResponse {
    debug!(username = %user.username, "Serving test page");
    TestTemplate {}
}
