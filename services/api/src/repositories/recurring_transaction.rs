//! Recurring transaction repository

use auth::UserId;
use common::error::{DatabaseError, DatabaseResult};
use sqlx::PgConnection;

use crate::models::{NewRecurringTransaction, RecurringTransaction};

/// List a user's recurring transactions, soonest next run first
pub async fn list_by_user(
    conn: &mut PgConnection,
    user_id: UserId,
) -> DatabaseResult<Vec<RecurringTransaction>> {
    sqlx::query_as::<_, RecurringTransaction>(
        r#"
        SELECT id, user_id, account_id, category_id, amount, note, frequency,
               start_date, next_run_date, end_date, created_at
        FROM recurring_transactions
        WHERE user_id = $1
        ORDER BY next_run_date ASC, id ASC
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
) -> DatabaseResult<Option<RecurringTransaction>> {
    sqlx::query_as::<_, RecurringTransaction>(
        r#"
        SELECT id, user_id, account_id, category_id, amount, note, frequency,
               start_date, next_run_date, end_date, created_at
        FROM recurring_transactions
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
    recurring: &NewRecurringTransaction,
) -> DatabaseResult<RecurringTransaction> {
    sqlx::query_as::<_, RecurringTransaction>(
        r#"
        INSERT INTO recurring_transactions
            (user_id, account_id, category_id, amount, note, frequency,
             start_date, next_run_date, end_date)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id, user_id, account_id, category_id, amount, note, frequency,
                  start_date, next_run_date, end_date, created_at
        "#,
    )
    .bind(user_id)
    .bind(recurring.account_id)
    .bind(recurring.category_id)
    .bind(recurring.amount)
    .bind(&recurring.note)
    .bind(&recurring.frequency)
    .bind(recurring.start_date)
    .bind(recurring.next_run_date)
    .bind(recurring.end_date)
    .fetch_one(&mut *conn)
    .await
    .map_err(DatabaseError::Query)
}
