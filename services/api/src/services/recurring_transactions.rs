use auth::UserId;
use common::error::DatabaseError;
use sqlx::PgPool;
use tracing::info;

use super::{ServiceResult, acquire, begin, ensure_account, ensure_optional_category};
use crate::{
    models::{NewRecurringTransaction, RecurringTransaction},
    repositories::recurring_transaction as store,
};

#[derive(Clone)]
pub struct RecurringTransactionService {
    pool: PgPool,
}

impl RecurringTransactionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, user_id: UserId) -> ServiceResult<Vec<RecurringTransaction>> {
        let mut conn = acquire(&self.pool).await?;
        Ok(store::list_by_user(&mut conn, user_id).await?)
    }

    pub async fn find(
        &self,
        id: i64,
        user_id: UserId,
    ) -> ServiceResult<Option<RecurringTransaction>> {
        let mut conn = acquire(&self.pool).await?;
        Ok(store::find_by_id(&mut conn, id, user_id).await?)
    }

    pub async fn create(
        &self,
        user_id: UserId,
        input: NewRecurringTransaction,
    ) -> ServiceResult<RecurringTransaction> {
        let mut tx = begin(&self.pool).await?;

        ensure_account(&mut tx, input.account_id, user_id).await?;
        ensure_optional_category(&mut tx, input.category_id, user_id).await?;
        let created = store::insert(&mut tx, user_id, &input).await?;

        tx.commit().await.map_err(DatabaseError::Query)?;

        info!(%user_id, recurring_transaction_id = created.id, "Created recurring transaction");
        Ok(created)
    }
}
