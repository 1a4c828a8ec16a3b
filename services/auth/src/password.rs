//! Salted one-way password hashing
//!
//! Argon2id with the crate's default cost parameters. Both operations run
//! on the blocking thread pool so a slow hash never stalls the executor.

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};

use crate::error::{AuthError, AuthResult};

/// Well-formed Argon2id hash with default cost that matches no password
///
/// Logins for unknown emails verify against it so they cost as much as a
/// wrong password for a real user.
pub const DUMMY_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$yLoRLj3E09gO1zpnfXLTaA$ZYAp1TxcvRHPdo1frAbI3LTDUUx9jbqF7OY0g1m4hXY";

/// Hash a password into a PHC string
pub async fn hash_password(password: String) -> AuthResult<String> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut rand::thread_rng());
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::PasswordHash(e.to_string()))
    })
    .await
    .map_err(|e| AuthError::PasswordHash(e.to_string()))?
}

/// Check a password against a stored PHC string
pub async fn verify_password(password: String, password_hash: String) -> AuthResult<bool> {
    tokio::task::spawn_blocking(move || {
        let parsed_hash = PasswordHash::new(&password_hash).map_err(|e| {
            AuthError::PasswordHash(format!("Failed to parse password hash: {}", e))
        })?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    })
    .await
    .map_err(|e| AuthError::PasswordHash(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_verifies_only_the_original_password() {
        let hash = hash_password("pw1".to_string()).await.unwrap();

        assert!(hash.starts_with("$argon2"));
        let original = verify_password("pw1".to_string(), hash.clone()).await;
        let other = verify_password("pw2".to_string(), hash).await;

        assert!(original.unwrap());
        assert!(!other.unwrap());
    }

    #[tokio::test]
    async fn same_password_gets_a_fresh_salt() {
        let first = hash_password("secret".to_string()).await.unwrap();
        let second = hash_password("secret".to_string()).await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn dummy_hash_parses_and_matches_nothing() {
        for password in ["", "pw1", "password"] {
            let matched = verify_password(password.to_string(), DUMMY_PASSWORD_HASH.to_string())
                .await
                .unwrap();
            assert!(!matched);
        }
    }

    #[test]
    fn dummy_hash_uses_default_cost() {
        let parsed = PasswordHash::new(DUMMY_PASSWORD_HASH).unwrap();
        let params = argon2::Params::try_from(&parsed).unwrap();

        assert_eq!(parsed.algorithm, argon2::Algorithm::Argon2id.ident());
        assert_eq!(params.m_cost(), argon2::Params::default().m_cost());
        assert_eq!(params.t_cost(), argon2::Params::default().t_cost());
        assert_eq!(params.p_cost(), argon2::Params::default().p_cost());
    }

    #[tokio::test]
    async fn corrupt_hash_is_an_error_not_a_mismatch() {
        let result = verify_password("pw".to_string(), "not-a-phc-string".to_string()).await;

        assert!(matches!(result, Err(AuthError::PasswordHash(_))));
    }
}
