use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use crate::error::AppError;

/// Hash a plaintext password into a PHC string (Argon2id, default
/// parameters, fresh random salt). Argon2 costs tens of milliseconds of
/// CPU, so the work runs on the blocking pool and never stalls other
/// in-flight requests.
pub async fn hash_password(plaintext: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash_blocking(&plaintext))
        .await
        .map_err(|e| AppError::PasswordHash(format!("hashing task failed: {e}")))?
}

/// Verify a plaintext password against a stored PHC string, on the blocking
/// pool. A malformed stored hash (or a failed task) counts as a mismatch,
/// not an error.
pub async fn verify_password(plaintext: String, stored: String) -> bool {
    tokio::task::spawn_blocking(move || verify_blocking(&plaintext, &stored))
        .await
        .unwrap_or(false)
}

fn hash_blocking(plaintext: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(plaintext.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

fn verify_blocking(plaintext: &str, stored: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored) else {
        return false;
    };
    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_then_verify_roundtrip() {
        let hash = hash_password("secret1".to_string()).await.unwrap();
        assert!(verify_password("secret1".to_string(), hash.clone()).await);
        assert!(!verify_password("secret2".to_string(), hash).await);
    }

    #[tokio::test]
    async fn hash_is_salted_phc_string_not_plaintext() {
        let hash = hash_password("secret1".to_string()).await.unwrap();
        assert_ne!(hash, "secret1");
        assert!(hash.starts_with("$argon2"));
        // fresh salt per call
        assert_ne!(hash, hash_password("secret1".to_string()).await.unwrap());
    }

    #[tokio::test]
    async fn malformed_stored_hash_is_a_mismatch() {
        assert!(!verify_password("secret1".to_string(), "not-a-phc-string".to_string()).await);
        assert!(!verify_password("secret1".to_string(), String::new()).await);
    }
}
