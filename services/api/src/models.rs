//! API models for request and response payloads
//!
//! Each resource module holds the stored entity (the response shape), the
//! raw request payload, and the validated input handed to the service layer.
//! Payload fields are read as loose JSON values so that every validation
//! failure can be reported with a message naming the offending field.

use serde::Deserialize;
use serde_json::Value;

pub mod account;
pub mod budget;
pub mod category;
pub mod goal;
pub mod recurring_transaction;
pub mod transaction;

pub use account::{Account, CreateAccountRequest, NewAccount};
pub use budget::{Budget, CreateBudgetRequest, NewBudget};
pub use category::{Category, CreateCategoryRequest, NewCategory};
pub use goal::{CreateGoalRequest, Goal, NewGoal};
pub use recurring_transaction::{
    CreateRecurringTransactionRequest, NewRecurringTransaction, RecurringTransaction,
};
pub use transaction::{CreateTransactionRequest, NewTransaction, Transaction};

/// Request body for registration and login
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CredentialsRequest {
    pub email: Option<Value>,
    pub password: Option<Value>,
}

impl CredentialsRequest {
    pub fn email(&self) -> Option<&str> {
        self.email.as_ref().and_then(Value::as_str)
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_ref().and_then(Value::as_str)
    }
}
