//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{login_handler, secret_handler, test_handler, token_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Protected routes requiring an active account.
///
/// Protected via [`crate::web::middleware::bearer_auth`]. Trailing slashes
/// are trimmed before routing, so `/secret/` reaches `/secret`.
///
/// # Endpoints
///
/// - `GET /secret` - Secret page
/// - `GET /test` - Test page
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/secret", get(secret_handler))
        .route("/test", get(test_handler))
}

/// Public routes without authentication.
///
/// # Endpoints
///
/// - `GET /` - Login page
/// - `POST /token` - Credential check and token issuance
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(login_handler))
        .route("/token", post(token_handler))
}
