//! Password transform used by the credential store.
//!
//! This is NOT password hashing. The stored value is the plaintext with a fixed
//! prefix, so anyone who can read the store can recover every password. It
//! exists only to reproduce the demo credential table; do not reuse it.

/// Prefix prepended to a plaintext password to form its stored value.
const FAKE_HASH_PREFIX: &str = "fakehashed";

/// Transforms a plaintext password into its stored form.
///
/// # Examples
///
/// ```
/// use token_login::utils::password::fake_hash_password;
///
/// assert_eq!(fake_hash_password("password"), "fakehashedpassword");
/// ```
pub fn fake_hash_password(password: &str) -> String {
    format!("{FAKE_HASH_PREFIX}{password}")
}

/// Returns true if `password` transforms into `hashed_password`.
///
/// Plain string comparison; no timing-attack mitigation.
pub fn verify_password(password: &str, hashed_password: &str) -> bool {
    fake_hash_password(password) == hashed_password
}
