//! Transaction repository

use auth::UserId;
use common::error::{DatabaseError, DatabaseResult};
use sqlx::PgConnection;

use crate::models::{NewTransaction, Transaction};

/// List a user's transactions, most recent date first
pub async fn list_by_user(
    conn: &mut PgConnection,
    user_id: UserId,
) -> DatabaseResult<Vec<Transaction>> {
    sqlx::query_as::<_, Transaction>(
        r#"
        SELECT id, user_id, account_id, category_id, amount, date, note, created_at
        FROM transactions
        WHERE user_id = $1
        ORDER BY date DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(&mut *conn)
    .await
    .map_err(DatabaseError::Query)
}

pub async fn find_by_id(
    conn: &mut PgConnection,
    id: i64,
    user_id: UserId,
) -> DatabaseResult<Option<Transaction>> {
    sqlx::query_as::<_, Transaction>(
        r#"
        SELECT id, user_id, account_id, category_id, amount, date, note, created_at
        FROM transactions
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(&mut *conn)
    .await
    .map_err(DatabaseError::Query)
}

/// Insert a transaction whose references were already checked
pub async fn insert(
    conn: &mut PgConnection,
    user_id: UserId,
    transaction: &NewTransaction,
) -> DatabaseResult<Transaction> {
    sqlx::query_as::<_, Transaction>(
        r#"
        INSERT INTO transactions (user_id, account_id, category_id, amount, date, note)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, user_id, account_id, category_id, amount, date, note, created_at
        "#,
    )
    .bind(user_id)
    .bind(transaction.account_id)
    .bind(transaction.category_id)
    .bind(transaction.amount)
    .bind(transaction.date)
    .bind(&transaction.note)
    .fetch_one(&mut *conn)
    .await
    .map_err(DatabaseError::Query)
}
