//! Application state shared across handlers

use auth::{AuthService, JwtService};
use sqlx::PgPool;

use crate::services::{
    AccountService, BudgetService, CategoryService, GoalService, RecurringTransactionService,
    TransactionService,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub account_service: AccountService,
    pub category_service: CategoryService,
    pub transaction_service: TransactionService,
    pub budget_service: BudgetService,
    pub recurring_transaction_service: RecurringTransactionService,
    pub goal_service: GoalService,
}

impl AppState {
    pub fn new(pool: PgPool, jwt_service: JwtService) -> Self {
        Self {
            auth_service: AuthService::new(pool.clone(), jwt_service),
            account_service: AccountService::new(pool.clone()),
            category_service: CategoryService::new(pool.clone()),
            transaction_service: TransactionService::new(pool.clone()),
            budget_service: BudgetService::new(pool.clone()),
            recurring_transaction_service: RecurringTransactionService::new(pool.clone()),
            goal_service: GoalService::new(pool),
        }
    }
}
