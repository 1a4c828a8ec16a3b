use auth::UserId;
use common::error::DatabaseError;
use sqlx::PgPool;
use tracing::info;

use super::{ServiceResult, acquire, begin, ensure_category};
use crate::{
    models::{Budget, NewBudget},
    repositories::budget,
};

#[derive(Clone)]
pub struct BudgetService {
    pool: PgPool,
}

impl BudgetService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, user_id: UserId) -> ServiceResult<Vec<Budget>> {
        let mut conn = acquire(&self.pool).await?;
        Ok(budget::list_by_user(&mut conn, user_id).await?)
    }

    pub async fn find(&self, id: i64, user_id: UserId) -> ServiceResult<Option<Budget>> {
        let mut conn = acquire(&self.pool).await?;
        Ok(budget::find_by_id(&mut conn, id, user_id).await?)
    }

    pub async fn create(&self, user_id: UserId, input: NewBudget) -> ServiceResult<Budget> {
        let mut tx = begin(&self.pool).await?;

        ensure_category(&mut tx, input.category_id, user_id).await?;
        let created = budget::insert(&mut tx, user_id, &input).await?;

        tx.commit().await.map_err(DatabaseError::Query)?;

        info!(%user_id, budget_id = created.id, "Created budget");
        Ok(created)
    }
}
