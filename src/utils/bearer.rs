//! `Authorization` header parsing.

use axum::http::{HeaderMap, header::AUTHORIZATION};

const BEARER_SCHEME: &str = "bearer";

/// Extracts the token from an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively (`Bearer`, `bearer`, `BEARER`).
/// Returns `None` for a missing header, another scheme or an empty token.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}
