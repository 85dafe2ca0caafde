//! Bearer token authentication middleware for protected pages.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::utils::bearer::extract_bearer_token;
use crate::utils::cookie::{SESSION_COOKIE, extract_cookie};
use crate::{error::AppError, state::AppState};

/// Authenticates requests and requires an active account.
///
/// # Token Sources
///
/// ```text
/// Authorization: Bearer <token>
/// Cookie: session=<token>
/// ```
///
/// The scheme is matched case-insensitively, so `bearer <token>` works too.
/// The `Authorization` header wins when present. The `session` cookie set by
/// `POST /token` is accepted as a fallback so a browser can follow links to
/// the protected pages right after logging in.
///
/// # Authentication Flow
///
/// 1. Extract the token from the header or the cookie
/// 2. Resolve it via [`crate::application::services::AuthService::authorize_active`]
/// 3. Store the resolved [`crate::domain::entities::UserRecord`] in request
///    extensions for handlers
/// 4. Continue to the handler
///
/// # Errors
///
/// - `401 Unauthorized` if no token is presented or the token was never issued
/// - `400 Bad Request` if the account is disabled
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer_token(req.headers())
        .or_else(|| extract_cookie(req.headers(), SESSION_COOKIE))
        .ok_or(AppError::UnauthenticatedToken)?;

    let user = st.auth_service.authorize_active(&token).await?;

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
