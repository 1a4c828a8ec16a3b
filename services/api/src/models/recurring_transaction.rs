//! Recurring transaction models
//!
//! A recurring transaction is a stored template. Nothing reads or advances
//! `next_run_date`; the dates are kept exactly as the client supplied them.

use auth::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::{error::ApiError, validation};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecurringTransaction {
    pub id: i64,
    pub user_id: UserId,
    pub account_id: i64,
    pub category_id: Option<i64>,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub note: Option<String>,
    pub frequency: String,
    pub start_date: NaiveDate,
    pub next_run_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /recurring-transactions`
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateRecurringTransactionRequest {
    #[serde(alias = "account_id")]
    pub account_id: Option<Value>,
    #[serde(alias = "category_id")]
    pub category_id: Option<Value>,
    pub amount: Option<Value>,
    pub note: Option<Value>,
    pub frequency: Option<Value>,
    #[serde(alias = "start_date")]
    pub start_date: Option<Value>,
    #[serde(alias = "next_run_date")]
    pub next_run_date: Option<Value>,
    #[serde(alias = "end_date")]
    pub end_date: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRecurringTransaction {
    pub account_id: i64,
    pub category_id: Option<i64>,
    pub amount: Decimal,
    pub note: Option<String>,
    pub frequency: String,
    pub start_date: NaiveDate,
    pub next_run_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl CreateRecurringTransactionRequest {
    pub fn validate(self) -> Result<NewRecurringTransaction, ApiError> {
        let frequency = validation::text(self.frequency);
        let (
            Some(account_id),
            Some(amount),
            Some(frequency),
            Some(Value::String(start_date)),
            Some(Value::String(next_run_date)),
        ) = (
            self.account_id,
            self.amount,
            frequency,
            self.start_date,
            self.next_run_date,
        )
        else {
            return Err(required());
        };
        if start_date.is_empty() || next_run_date.is_empty() {
            return Err(required());
        }

        let account_id =
            validation::reference_id(&account_id).ok_or_else(|| validation::invalid("accountId"))?;
        let amount = validation::amount(&amount).ok_or_else(|| validation::invalid("amount"))?;

        let (Some(start_date), Some(next_run_date)) =
            (validation::date(&start_date), validation::date(&next_run_date))
        else {
            return Err(ApiError::BadRequest(
                "startDate and nextRunDate must be YYYY-MM-DD".to_string(),
            ));
        };

        let category_id = validation::optional_reference_id(self.category_id, "categoryId")?;
        let end_date = validation::optional_date(self.end_date, "endDate must be YYYY-MM-DD")?;
        let note = validation::note(self.note)?;

        Ok(NewRecurringTransaction {
            account_id,
            category_id,
            amount,
            note,
            frequency,
            start_date,
            next_run_date,
            end_date,
        })
    }
}

fn required() -> ApiError {
    ApiError::BadRequest(
        "accountId, amount, frequency, startDate, and nextRunDate are required".to_string(),
    )
}
