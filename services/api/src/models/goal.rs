//! Goal models

use auth::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::{error::ApiError, validation};

/// A savings target
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Goal {
    pub id: i64,
    pub user_id: UserId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub target_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub current_amount: Decimal,
    pub deadline: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /goals`
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateGoalRequest {
    pub name: Option<Value>,
    #[serde(alias = "target_amount")]
    pub target_amount: Option<Value>,
    #[serde(alias = "current_amount")]
    pub current_amount: Option<Value>,
    pub deadline: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewGoal {
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub deadline: Option<NaiveDate>,
}

impl CreateGoalRequest {
    pub fn validate(self) -> Result<NewGoal, ApiError> {
        let (Some(name), Some(target_amount)) =
            (validation::text(self.name), self.target_amount)
        else {
            return Err(ApiError::BadRequest(
                "name and targetAmount are required".to_string(),
            ));
        };

        let target_amount = validation::non_negative_amount(&target_amount)
            .ok_or_else(|| validation::invalid("targetAmount"))?;
        let current_amount = match self.current_amount {
            None => Decimal::ZERO,
            Some(value) => validation::non_negative_amount(&value)
                .ok_or_else(|| validation::invalid("currentAmount"))?,
        };
        let deadline = validation::optional_date(self.deadline, "deadline must be YYYY-MM-DD")?;

        Ok(NewGoal {
            name,
            target_amount,
            current_amount,
            deadline,
        })
    }
}
