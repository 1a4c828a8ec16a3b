//! Error types for credential and token handling

use common::error::DatabaseError;
use thiserror::Error;

/// Failure of a registration, login or token operation
#[derive(Error, Debug)]
pub enum AuthError {
    /// Missing or malformed credentials
    #[error("{0}")]
    InvalidInput(String),

    /// A user with the normalized email already exists
    #[error("User with this email already exists")]
    EmailExists,

    /// Unknown email or wrong password; the two are never distinguished
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Token is malformed, has a bad signature or has expired
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Token verified but does not carry a numeric user id
    #[error("Invalid token payload")]
    InvalidTokenPayload,

    /// Hashing or hash parsing failed
    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    /// Token signing failed
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Invalid token settings
    #[error("Token configuration error: {0}")]
    Configuration(String),

    /// Store failure
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// Type alias for authentication results
pub type AuthResult<T> = Result<T, AuthError>;
