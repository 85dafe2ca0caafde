//! Token issuance handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::header::{AUTHORIZATION, SET_COOKIE},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::cookie::session_cookie;

/// Form fields submitted by the login page.
#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Page shown after a successful login.
#[derive(Template, WebTemplate)]
#[template(path = "login_success.html")]
struct LoginSuccessTemplate {
    username: String,
}

/// Checks credentials and issues a bearer token.
///
/// # Endpoint
///
/// `POST /token`
///
/// # Request Body
///
/// ```text
/// Content-Type: application/x-www-form-urlencoded
///
/// username=testuser&password=password
/// ```
///
/// # Response
///
/// On success, `200 OK` with an HTML page and the token in two places:
///
/// ```text
/// Authorization: Bearer 3f2c9a...
/// Set-Cookie: session=3f2c9a...; Path=/; HttpOnly; SameSite=Lax
/// ```
///
/// # Errors
///
/// - `400 Bad Request` - unknown username or wrong password
/// - `422 Unprocessable Entity` - missing form fields (form extractor rejection)
pub async fn token_handler(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, AppError> {
    let token = state
        .auth_service
        .login(&form.username, &form.password)
        .await?;

    let headers = [
        (AUTHORIZATION, format!("Bearer {token}")),
        (SET_COOKIE, session_cookie(token.as_str())),
    ];

    Ok((
        headers,
        LoginSuccessTemplate {
            username: form.username,
        },
    ))
}
