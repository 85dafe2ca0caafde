//! Application error type and its HTTP mapping.
//!
//! Every failure of the login core is surfaced to the client directly; none are
//! retried. Startup failures use `anyhow` instead and never reach this type.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::WWW_AUTHENTICATE},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
}

/// Errors produced by credential checks, token validation and storage.
#[derive(Debug, Error)]
pub enum AppError {
    /// The submitted username is not in the credential store.
    #[error("Incorrect username")]
    UnknownUser,

    /// The submitted password does not hash to the stored value.
    #[error("Incorrect password")]
    BadPassword,

    /// No token was presented, or the token was never issued.
    #[error("Invalid authentication credentials")]
    UnauthenticatedToken,

    /// The token is valid but its account is disabled.
    #[error("Inactive user")]
    InactiveAccount,

    /// Storage or entropy failure. The message is logged, not returned.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UnknownUser | AppError::BadPassword | AppError::InactiveAccount => {
                StatusCode::BAD_REQUEST
            }
            AppError::UnauthenticatedToken => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code included in the response body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::UnknownUser => "unknown_user",
            AppError::BadPassword => "bad_password",
            AppError::UnauthenticatedToken => "unauthenticated",
            AppError::InactiveAccount => "inactive_account",
            AppError::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let message = match &self {
            AppError::Internal(cause) => {
                tracing::error!(error = %cause, "Request failed with internal error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorBody {
            error: ErrorInfo { code, message },
        };

        let mut response = (status, Json(body)).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal(format!("Database error: {e}"))
    }
}
