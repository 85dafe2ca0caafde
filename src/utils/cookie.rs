//! `Cookie` header helpers.

use axum::http::{HeaderMap, header::COOKIE};

/// Name of the cookie that carries the session token.
pub const SESSION_COOKIE: &str = "session";

/// Extracts the value of cookie `name` from the request headers.
///
/// Handles several cookies in one header and several `Cookie` headers;
/// cookies with other names are ignored. Empty values count as missing.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(key), Some(value)) if key == name && !value.is_empty() => {
                    Some(value.to_string())
                }
                _ => None,
            }
        })
}

/// Builds the `Set-Cookie` value that stores a session token in the browser.
pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_cookie_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; session=abc123; lang=en"),
        );

        assert_eq!(
            extract_cookie(&headers, SESSION_COOKIE),
            Some("abc123".to_string())
        );
        assert_eq!(extract_cookie(&headers, "lang"), Some("en".to_string()));
    }

    #[test]
    fn test_extract_cookie_missing() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_cookie(&headers, SESSION_COOKIE), None);

        headers.insert(COOKIE, HeaderValue::from_static("sessionid=zzz; session="));
        assert_eq!(extract_cookie(&headers, SESSION_COOKIE), None);
    }

    #[test]
    fn test_extract_cookie_across_headers() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(COOKIE, HeaderValue::from_static("session=fromsecond"));

        assert_eq!(
            extract_cookie(&headers, SESSION_COOKIE),
            Some("fromsecond".to_string())
        );
    }

    #[test]
    fn test_session_cookie_format() {
        assert_eq!(
            session_cookie("abc"),
            "session=abc; Path=/; HttpOnly; SameSite=Lax"
        );
    }
}
