//! Authentication for the finance API
//!
//! Owns user credentials (Argon2 password hashes in PostgreSQL) and the
//! stateless bearer tokens derived from them.

pub mod error;
pub mod jwt;
pub mod models;
pub mod password;
pub mod repositories;
pub mod service;
pub mod validation;

pub use error::{AuthError, AuthResult};
pub use jwt::{JwtConfig, JwtService};
pub use models::{Credentials, PublicUser, TokenGrant, UserId};
pub use service::AuthService;
