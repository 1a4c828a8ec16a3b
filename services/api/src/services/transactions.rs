use auth::UserId;
use common::error::DatabaseError;
use sqlx::PgPool;
use tracing::info;

use super::{ServiceResult, acquire, begin, ensure_account, ensure_optional_category};
use crate::{
    models::{NewTransaction, Transaction},
    repositories::transaction,
};

#[derive(Clone)]
pub struct TransactionService {
    pool: PgPool,
}

impl TransactionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, user_id: UserId) -> ServiceResult<Vec<Transaction>> {
        let mut conn = acquire(&self.pool).await?;
        Ok(transaction::list_by_user(&mut conn, user_id).await?)
    }

    pub async fn find(&self, id: i64, user_id: UserId) -> ServiceResult<Option<Transaction>> {
        let mut conn = acquire(&self.pool).await?;
        Ok(transaction::find_by_id(&mut conn, id, user_id).await?)
    }

    /// Record a transaction after resolving its account and category
    ///
    /// The account is checked before the category, so a request with two bad
    /// references reports the account.
    pub async fn create(
        &self,
        user_id: UserId,
        input: NewTransaction,
    ) -> ServiceResult<Transaction> {
        let mut tx = begin(&self.pool).await?;

        ensure_account(&mut tx, input.account_id, user_id).await?;
        ensure_optional_category(&mut tx, input.category_id, user_id).await?;
        let created = transaction::insert(&mut tx, user_id, &input).await?;

        tx.commit().await.map_err(DatabaseError::Query)?;

        info!(%user_id, transaction_id = created.id, "Created transaction");
        Ok(created)
    }
}
