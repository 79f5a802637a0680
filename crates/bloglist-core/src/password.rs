//! Password hashing and verification.
//!
//! Passwords are hashed with bcrypt, which embeds a random salt in every
//! hash. The work factor is fixed so all stored hashes are comparable in cost.

use anyhow::Context;
use bcrypt::{hash, verify};

use crate::errors::AppError;

/// bcrypt work factor applied to every stored password hash.
pub const PASSWORD_HASH_COST: u32 = 10;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, PASSWORD_HASH_COST)
        .context("Failed to hash password")
        .map_err(AppError::internal)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .context("Failed to verify password")
        .map_err(AppError::internal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_uses_fixed_cost() {
        let hashed = hash_password("sekret").unwrap();
        assert!(hashed.starts_with("$2b$10$"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let first = hash_password("sekret").unwrap();
        let second = hash_password("sekret").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("sekret", &first).unwrap());
        assert!(verify_password("sekret", &second).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(verify_password("sekret", "not-a-bcrypt-hash").is_err());
    }
}
