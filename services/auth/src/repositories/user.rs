//! User repository for database operations
//!
//! Every function runs on a connection borrowed from the caller so that one
//! logical operation holds exactly one pooled connection.

use common::error::{DatabaseError, DatabaseResult};
use sqlx::PgConnection;
use tracing::debug;

use crate::models::User;

/// Insert a user with an already hashed password
pub async fn insert(
    conn: &mut PgConnection,
    email: &str,
    password_hash: &str,
) -> DatabaseResult<User> {
    debug!("Creating new user");

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, password_hash)
        VALUES ($1, $2)
        RETURNING id, email, password_hash, created_at
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .fetch_one(&mut *conn)
    .await
    .map_err(DatabaseError::Query)
}

/// Find a user by normalized email
pub async fn find_by_email(conn: &mut PgConnection, email: &str) -> DatabaseResult<Option<User>> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, created_at
        FROM users
        WHERE LOWER(email) = LOWER($1)
        "#,
    )
    .bind(email)
    .fetch_optional(&mut *conn)
    .await
    .map_err(DatabaseError::Query)
}
