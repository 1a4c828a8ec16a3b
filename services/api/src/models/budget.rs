//! Budget models

use auth::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::{error::ApiError, validation};

/// Planned spend ceiling for one category in the month of `period_date`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Budget {
    pub id: i64,
    pub user_id: UserId,
    pub category_id: i64,
    pub period_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /budgets`
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateBudgetRequest {
    #[serde(alias = "category_id")]
    pub category_id: Option<Value>,
    #[serde(alias = "period_date")]
    pub period_date: Option<Value>,
    pub amount: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBudget {
    pub category_id: i64,
    pub period_date: NaiveDate,
    pub amount: Decimal,
}

impl CreateBudgetRequest {
    pub fn validate(self) -> Result<NewBudget, ApiError> {
        let (Some(category_id), Some(Value::String(period_date)), Some(amount)) =
            (self.category_id, self.period_date, self.amount)
        else {
            return Err(required());
        };
        if period_date.is_empty() {
            return Err(required());
        }

        let category_id = validation::reference_id(&category_id)
            .ok_or_else(|| validation::invalid("categoryId"))?;
        let amount =
            validation::non_negative_amount(&amount).ok_or_else(|| validation::invalid("amount"))?;
        let period_date = validation::date(&period_date).ok_or_else(|| {
            ApiError::BadRequest("periodDate must be in YYYY-MM-DD format".to_string())
        })?;

        Ok(NewBudget {
            category_id,
            period_date,
            amount,
        })
    }
}

fn required() -> ApiError {
    ApiError::BadRequest(
        "categoryId, periodDate, and amount are required".to_string(),
    )
}
