//! Registration, login and token verification

use common::error::DatabaseError;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::{
    error::{AuthError, AuthResult},
    jwt::JwtService,
    models::{Credentials, PublicUser, TokenGrant, UserId},
    password::{DUMMY_PASSWORD_HASH, hash_password, verify_password},
    repositories::user,
};

/// Owner of user identities and the token lifecycle
#[derive(Clone)]
pub struct AuthService {
    pool: PgPool,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(pool: PgPool, jwt_service: JwtService) -> Self {
        Self { pool, jwt_service }
    }

    /// Create a user from normalized credentials
    ///
    /// Fails with [`AuthError::EmailExists`] when the email is taken, including
    /// when a concurrent registration wins the race to the unique index.
    pub async fn register(&self, credentials: Credentials) -> AuthResult<PublicUser> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(DatabaseError::Connection)?;

        if user::find_by_email(&mut conn, &credentials.email)
            .await?
            .is_some()
        {
            return Err(AuthError::EmailExists);
        }

        let password_hash = hash_password(credentials.password).await?;

        let user = user::insert(&mut conn, &credentials.email, &password_hash)
            .await
            .map_err(|e| {
                if e.is_unique_violation() {
                    AuthError::EmailExists
                } else {
                    AuthError::Database(e)
                }
            })?;

        info!(user_id = %user.id, "Registered new user");
        Ok(user.into())
    }

    /// Check credentials and issue a bearer token
    pub async fn login(&self, credentials: Credentials) -> AuthResult<TokenGrant> {
        let found = {
            let mut conn = self
                .pool
                .acquire()
                .await
                .map_err(DatabaseError::Connection)?;
            user::find_by_email(&mut conn, &credentials.email).await?
        };

        let Some(user) = found else {
            verify_password(credentials.password, DUMMY_PASSWORD_HASH.to_string()).await?;
            warn!("Login attempt for unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_password(credentials.password, user.password_hash.clone()).await? {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.jwt_service.issue(user.id)?;
        info!(user_id = %user.id, "User logged in");

        Ok(TokenGrant {
            token,
            user: user.into(),
        })
    }

    /// Resolve a bearer token to the user it was issued for
    pub fn verify_token(&self, token: &str) -> AuthResult<UserId> {
        self.jwt_service.verify(token)
    }
}
