//! Account repository

use auth::UserId;
use common::error::{DatabaseError, DatabaseResult};
use sqlx::PgConnection;

use crate::models::{Account, NewAccount};

/// List all accounts owned by a user, oldest first
pub async fn list_by_user(
    conn: &mut PgConnection,
    user_id: UserId,
) -> DatabaseResult<Vec<Account>> {
    sqlx::query_as::<_, Account>(
        r#"
        SELECT id, user_id, name, type, balance, created_at
        FROM accounts
        WHERE user_id = $1
        ORDER BY id ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(&mut *conn)
    .await
    .map_err(DatabaseError::Query)
}

/// Find an account by id, only if the user owns it
pub async fn find_by_id(
    conn: &mut PgConnection,
    id: i64,
    user_id: UserId,
) -> DatabaseResult<Option<Account>> {
    sqlx::query_as::<_, Account>(
        r#"
        SELECT id, user_id, name, type, balance, created_at
        FROM accounts
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(&mut *conn)
    .await
    .map_err(DatabaseError::Query)
}

pub async fn insert(
    conn: &mut PgConnection,
    user_id: UserId,
    account: &NewAccount,
) -> DatabaseResult<Account> {
    sqlx::query_as::<_, Account>(
        r#"
        INSERT INTO accounts (user_id, name, type, balance)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, name, type, balance, created_at
        "#,
    )
    .bind(user_id)
    .bind(&account.name)
    .bind(&account.account_type)
    .bind(account.balance)
    .fetch_one(&mut *conn)
    .await
    .map_err(DatabaseError::Query)
}
