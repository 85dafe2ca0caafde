//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`          - Login page (public)
//! - `POST /token`     - Issue a bearer token (public)
//! - `GET  /secret/`   - Secret page (active account required)
//! - `GET  /test/`     - Test page (active account required)
//! - `/static/*`       - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Bearer token or `session` cookie on protected pages
//! - **Path normalization** - Trailing slash handling

use crate::state::AppState;
use crate::web;
use crate::web::middleware::{bearer_auth, tracing};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the router with all routes and middleware, without path
/// normalization.
///
/// Routes are registered without trailing slashes. Use [`app_router`] when
/// serving, so `/secret/` and `/secret` both resolve.
pub fn router(state: AppState, static_dir: &str) -> Router {
    let protected = web::routes::protected_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        bearer_auth::layer,
    ));

    Router::new()
        .merge(protected)
        .merge(web::routes::public_routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service served by [`crate::server::run`].
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory mounted under `/static`
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, static_dir))
}
