//! Category repository

use auth::UserId;
use common::error::{DatabaseError, DatabaseResult};
use sqlx::PgConnection;

use crate::models::{Category, NewCategory};

pub async fn list_by_user(
    conn: &mut PgConnection,
    user_id: UserId,
) -> DatabaseResult<Vec<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, user_id, name, type, created_at
        FROM categories
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
) -> DatabaseResult<Option<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, user_id, name, type, created_at
        FROM categories
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
    category: &NewCategory,
) -> DatabaseResult<Category> {
    sqlx::query_as::<_, Category>(
        r#"
        INSERT INTO categories (user_id, name, type)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, name, type, created_at
        "#,
    )
    .bind(user_id)
    .bind(&category.name)
    .bind(&category.category_type)
    .fetch_one(&mut *conn)
    .await
    .map_err(DatabaseError::Query)
}
