//! Password hashing with Argon2id.
//!
//! Hashes are stored as PHC strings (`$argon2id$v=19$...`) so parameters and salt
//! travel with the hash. Both functions are CPU-bound; async callers go through
//! `spawn_blocking`.

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use uuid::Uuid;

use crate::core::error::{AppError, Result};

pub fn hash_password(password: &str) -> Result<String> {
    // 16 random bytes from the v4 generator
    let salt = SaltString::encode_b64(Uuid::new_v4().as_bytes())
        .map_err(|e| AppError::Internal(format!("Failed to encode salt: {}", e)))?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

/// `false` for a wrong password and for an unparseable stored hash alike
pub fn verify_password_hash(password: &str, password_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(password_hash) else {
        tracing::warn!("Stored password hash is not a valid PHC string");
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

pub async fn hash_password_blocking(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))?
}

pub async fn verify_password_hash_blocking(password: String, password_hash: String) -> bool {
    tokio::task::spawn_blocking(move || verify_password_hash(&password, &password_hash))
        .await
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_not_plaintext_and_verifies() {
        let hash = hash_password("securepass123").unwrap();

        assert_ne!(hash, "securepass123");
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password_hash("securepass123", &hash));
        assert!(!verify_password_hash("wrongpass123", &hash));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let first = hash_password("securepass123").unwrap();
        let second = hash_password("securepass123").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_garbage_hash_does_not_verify() {
        assert!(!verify_password_hash("anything", "not-a-phc-string"));
    }
}
