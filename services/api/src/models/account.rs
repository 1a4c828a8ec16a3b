//! Account models

use auth::UserId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::{error::ApiError, validation};

/// A named money container owned by one user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    pub id: i64,
    pub user_id: UserId,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub account_type: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /accounts`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateAccountRequest {
    pub name: Option<Value>,
    #[serde(rename = "type")]
    pub account_type: Option<Value>,
    pub balance: Option<Value>,
}

/// Validated account fields
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub name: String,
    pub account_type: String,
    pub balance: Decimal,
}

impl CreateAccountRequest {
    pub fn validate(self) -> Result<NewAccount, ApiError> {
        let (Some(name), Some(account_type)) = (
            validation::text(self.name),
            validation::text(self.account_type),
        ) else {
            return Err(ApiError::BadRequest(
                "name and type are required".to_string(),
            ));
        };

        let balance = match self.balance {
            None => Decimal::ZERO,
            Some(value) => validation::non_negative_amount(&value).ok_or_else(|| {
                ApiError::BadRequest("balance must be a non-negative number".to_string())
            })?,
        };

        Ok(NewAccount {
            name,
            account_type,
            balance,
        })
    }
}
