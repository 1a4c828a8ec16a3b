//! Goal repository

use auth::UserId;
use common::error::{DatabaseError, DatabaseResult};
use sqlx::PgConnection;

use crate::models::{Goal, NewGoal};

pub async fn list_by_user(conn: &mut PgConnection, user_id: UserId) -> DatabaseResult<Vec<Goal>> {
    sqlx::query_as::<_, Goal>(
        r#"
        SELECT id, user_id, name, target_amount, current_amount, deadline, created_at
        FROM goals
        WHERE user_id = $1
        ORDER BY id ASC
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
) -> DatabaseResult<Option<Goal>> {
    sqlx::query_as::<_, Goal>(
        r#"
        SELECT id, user_id, name, target_amount, current_amount, deadline, created_at
        FROM goals
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
    goal: &NewGoal,
) -> DatabaseResult<Goal> {
    sqlx::query_as::<_, Goal>(
        r#"
        INSERT INTO goals (user_id, name, target_amount, current_amount, deadline)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_id, name, target_amount, current_amount, deadline, created_at
        "#,
    )
    .bind(user_id)
    .bind(&goal.name)
    .bind(goal.target_amount)
    .bind(goal.current_amount)
    .bind(goal.deadline)
    .fetch_one(&mut *conn)
    .await
    .map_err(DatabaseError::Query)
}
