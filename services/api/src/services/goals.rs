use auth::UserId;
use sqlx::PgPool;
use tracing::info;

use super::{ServiceResult, acquire};
use crate::{
    models::{Goal, NewGoal},
    repositories::goal,
};

#[derive(Clone)]
pub struct GoalService {
    pool: PgPool,
}

impl GoalService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, user_id: UserId) -> ServiceResult<Vec<Goal>> {
        let mut conn = acquire(&self.pool).await?;
        Ok(goal::list_by_user(&mut conn, user_id).await?)
    }

    pub async fn find(&self, id: i64, user_id: UserId) -> ServiceResult<Option<Goal>> {
        let mut conn = acquire(&self.pool).await?;
        Ok(goal::find_by_id(&mut conn, id, user_id).await?)
    }

    pub async fn create(&self, user_id: UserId, input: NewGoal) -> ServiceResult<Goal> {
        let mut conn = acquire(&self.pool).await?;
        let created = goal::insert(&mut conn, user_id, &input).await?;

        info!(%user_id, goal_id = created.id, "Created goal");
        Ok(created)
    }
}
