//! JWT service for bearer token issuance and verification
//!
//! Tokens are signed with HS256 using a process-wide secret. No server-side
//! session state exists: a token stays valid until it expires or the secret
//! is rotated.

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

use crate::{
    error::{AuthError, AuthResult},
    models::UserId,
};

/// Default token lifetime: 7 days
pub const DEFAULT_TOKEN_EXPIRY: u64 = 7 * 24 * 60 * 60;

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared secret for signing and verifying tokens
    pub secret: String,
    /// Token lifetime in seconds
    pub expiry: u64,
}

impl JwtConfig {
    /// Build a config from a secret and a human-readable lifetime
    ///
    /// `expires_in` accepts plain seconds (`"3600"`) or a number with one of
    /// the suffixes `s`, `m`, `h`, `d` (`"7d"`).
    pub fn new(secret: impl Into<String>, expires_in: &str) -> AuthResult<Self> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(AuthError::Configuration(
                "JWT secret must not be empty".to_string(),
            ));
        }

        Ok(Self {
            secret,
            expiry: parse_expiry(expires_in)?,
        })
    }
}

/// Parse a token lifetime such as `"7d"`, `"12h"`, `"30m"`, `"45s"` or `"600"`
pub fn parse_expiry(value: &str) -> AuthResult<u64> {
    let value = value.trim();
    let invalid = || AuthError::Configuration(format!("Invalid token expiry: {:?}", value));

    let (digits, multiplier) = match value.char_indices().last() {
        Some((idx, 's')) => (&value[..idx], 1),
        Some((idx, 'm')) => (&value[..idx], 60),
        Some((idx, 'h')) => (&value[..idx], 60 * 60),
        Some((idx, 'd')) => (&value[..idx], 24 * 60 * 60),
        Some(_) => (value, 1),
        None => return Err(invalid()),
    };

    let amount: u64 = digits.parse().map_err(|_| invalid())?;
    let seconds = amount.checked_mul(multiplier).ok_or_else(invalid)?;
    if seconds == 0 {
        return Err(invalid());
    }

    Ok(seconds)
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated user
    #[serde(rename = "userId")]
    pub user_id: UserId,
    /// Issued at time
    pub iat: u64,
    /// Expiration time
    pub exp: u64,
}

/// JWT service
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    config: JwtConfig,
}

impl JwtService {
    /// Initialize a new JWT service
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        JwtService {
            encoding_key,
            decoding_key,
            validation,
            config,
        }
    }

    /// Issue a bearer token for a user
    pub fn issue(&self, user_id: UserId) -> AuthResult<String> {
        let now = unix_now()?;

        let claims = Claims {
            user_id,
            iat: now,
            exp: now + self.config.expiry,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Verify a token and return the user it was issued for
    pub fn verify(&self, token: &str) -> AuthResult<UserId> {
        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Ok(data.claims.user_id),
            Err(e) => {
                debug!("Token rejected: {}", e);
                match e.kind() {
                    ErrorKind::Json(_) => Err(AuthError::InvalidTokenPayload),
                    _ => Err(AuthError::InvalidToken),
                }
            }
        }
    }

    /// Get the token expiry time in seconds
    pub fn expiry(&self) -> u64 {
        self.config.expiry
    }
}

fn unix_now() -> AuthResult<u64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|e| AuthError::Configuration(format!("Failed to get current time: {}", e)))
}
