//! Password hashing and verification utilities.
//!
//! Centralises the Argon2id operations used by registration, login and
//! account seeding.

use argon2::password_hash::{PasswordHash, SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};

use crate::error::{ApiError, unauthorized};

/// Hash a plaintext password with Argon2id using a random salt.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;

    Ok(password_hash.to_string())
}

/// Verify a plaintext password against an Argon2 hash string.
///
/// Returns `Unauthorized` on mismatch so callers surface a uniform 401
/// without leaking whether the account exists.
pub fn verify_password(password: &str, hash: &str) -> Result<(), ApiError> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| anyhow::anyhow!("Invalid password hash: {}", e))?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| unauthorized(Some("Invalid email or password")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("s3cret-passphrase").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("s3cret-passphrase", &hash).is_ok());
    }

    #[test]
    fn test_wrong_password_rejected() {
        let hash = hash_password("correct horse").unwrap();
        let err = verify_password("battery staple", &hash).unwrap_err();
        assert_eq!(err.code, Box::from("UNAUTHORIZED"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same-password").unwrap();
        let b = hash_password("same-password").unwrap();
        assert_ne!(a, b);
    }
}
