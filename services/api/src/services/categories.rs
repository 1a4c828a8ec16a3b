use auth::UserId;
use sqlx::PgPool;
use tracing::info;

use super::{ServiceResult, acquire};
use crate::{
    models::{Category, NewCategory},
    repositories::category,
};

#[derive(Clone)]
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, user_id: UserId) -> ServiceResult<Vec<Category>> {
        let mut conn = acquire(&self.pool).await?;
        Ok(category::list_by_user(&mut conn, user_id).await?)
    }

    pub async fn find(&self, id: i64, user_id: UserId) -> ServiceResult<Option<Category>> {
        let mut conn = acquire(&self.pool).await?;
        Ok(category::find_by_id(&mut conn, id, user_id).await?)
    }

    pub async fn create(&self, user_id: UserId, input: NewCategory) -> ServiceResult<Category> {
        let mut conn = acquire(&self.pool).await?;
        let created = category::insert(&mut conn, user_id, &input).await?;

        info!(%user_id, category_id = created.id, "Created category");
        Ok(created)
    }
}
