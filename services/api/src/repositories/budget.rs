//! Budget repository

use auth::UserId;
use common::error::{DatabaseError, DatabaseResult};
use sqlx::PgConnection;

use crate::models::{Budget, NewBudget};

/// List a user's budgets, latest period first
pub async fn list_by_user(conn: &mut PgConnection, user_id: UserId) -> DatabaseResult<Vec<Budget>> {
    sqlx::query_as::<_, Budget>(
        r#"
        SELECT id, user_id, category_id, period_date, amount, created_at
        FROM budgets
        WHERE user_id = $1
        ORDER BY period_date DESC, id DESC
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
) -> DatabaseResult<Option<Budget>> {
    sqlx::query_as::<_, Budget>(
        r#"
        SELECT id, user_id, category_id, period_date, amount, created_at
        FROM budgets
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
    budget: &NewBudget,
) -> DatabaseResult<Budget> {
    sqlx::query_as::<_, Budget>(
        r#"
        INSERT INTO budgets (user_id, category_id, period_date, amount)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, category_id, period_date, amount, created_at
        "#,
    )
    .bind(user_id)
    .bind(budget.category_id)
    .bind(budget.period_date)
    .bind(budget.amount)
    .fetch_one(&mut *conn)
    .await
    .map_err(DatabaseError::Query)
}
