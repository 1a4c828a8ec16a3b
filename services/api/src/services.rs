//! Resource services
//!
//! Each service owns one resource type. It borrows exactly one pooled
//! connection per call and, for creates that reference other rows, resolves
//! those references under the caller's ownership inside the same store
//! transaction as the insert.

use auth::UserId;
use common::error::{DatabaseError, DatabaseResult};
use sqlx::{PgConnection, PgPool, Postgres, pool::PoolConnection};
use thiserror::Error;

use crate::repositories::{account, category};

pub mod accounts;
pub mod budgets;
pub mod categories;
pub mod goals;
pub mod recurring_transactions;
pub mod transactions;

pub use accounts::AccountService;
pub use budgets::BudgetService;
pub use categories::CategoryService;
pub use goals::GoalService;
pub use recurring_transactions::RecurringTransactionService;
pub use transactions::TransactionService;

/// Failures of a resource operation
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Referenced account is absent or owned by someone else
    #[error("Account not found")]
    AccountNotFound,

    /// Referenced category is absent or owned by someone else
    #[error("Category not found")]
    CategoryNotFound,

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

async fn acquire(pool: &PgPool) -> DatabaseResult<PoolConnection<Postgres>> {
    pool.acquire().await.map_err(DatabaseError::Connection)
}

async fn begin(pool: &PgPool) -> DatabaseResult<sqlx::Transaction<'static, Postgres>> {
    pool.begin().await.map_err(DatabaseError::Connection)
}

async fn ensure_account(conn: &mut PgConnection, id: i64, user_id: UserId) -> ServiceResult<()> {
    match account::find_by_id(conn, id, user_id).await? {
        Some(_) => Ok(()),
        None => Err(ServiceError::AccountNotFound),
    }
}

async fn ensure_category(conn: &mut PgConnection, id: i64, user_id: UserId) -> ServiceResult<()> {
    match category::find_by_id(conn, id, user_id).await? {
        Some(_) => Ok(()),
        None => Err(ServiceError::CategoryNotFound),
    }
}

async fn ensure_optional_category(
    conn: &mut PgConnection,
    id: Option<i64>,
    user_id: UserId,
) -> ServiceResult<()> {
    match id {
        Some(id) => ensure_category(conn, id, user_id).await,
        None => Ok(()),
    }
}
