use auth::UserId;
use sqlx::PgPool;
use tracing::info;

use super::{ServiceResult, acquire};
use crate::{
    models::{Account, NewAccount},
    repositories::account,
};

#[derive(Clone)]
pub struct AccountService {
    pool: PgPool,
}

impl AccountService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, user_id: UserId) -> ServiceResult<Vec<Account>> {
        let mut conn = acquire(&self.pool).await?;
        Ok(account::list_by_user(&mut conn, user_id).await?)
    }

    pub async fn find(&self, id: i64, user_id: UserId) -> ServiceResult<Option<Account>> {
        let mut conn = acquire(&self.pool).await?;
        Ok(account::find_by_id(&mut conn, id, user_id).await?)
    }

    pub async fn create(&self, user_id: UserId, input: NewAccount) -> ServiceResult<Account> {
        let mut conn = acquire(&self.pool).await?;
        let created = account::insert(&mut conn, user_id, &input).await?;

        info!(%user_id, account_id = created.id, "Created account");
        Ok(created)
    }
}
