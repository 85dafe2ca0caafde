//! Session token generation.

use crate::domain::entities::SessionToken;
use crate::error::AppError;

/// Number of random bytes in a token (128 bits).
pub const TOKEN_LENGTH_BYTES: usize = 16;

/// Generates a cryptographically secure random session token.
///
/// Uses `getrandom` for entropy and renders the bytes as lowercase hex,
/// producing a 32-character token.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
pub fn generate_token() -> Result<SessionToken, AppError> {
    let mut buffer = [0u8; TOKEN_LENGTH_BYTES];

    getrandom::fill(&mut buffer)
        .map_err(|e| AppError::internal(format!("Failed to generate random bytes: {e}")))?;

    Ok(SessionToken::new(hex::encode(buffer)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_token_format() {
        let token = generate_token().unwrap();

        assert_eq!(token.as_str().len(), TOKEN_LENGTH_BYTES * 2);
        assert!(
            token
                .as_str()
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn test_generate_token_uniqueness() {
        let tokens: HashSet<_> = (0..1000).map(|_| generate_token().unwrap()).collect();

        assert_eq!(tokens.len(), 1000);
    }
}
