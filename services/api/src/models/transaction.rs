//! Transaction models

use auth::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::{error::ApiError, validation};

/// A dated monetary movement on one account
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub id: i64,
    pub user_id: UserId,
    pub account_id: i64,
    pub category_id: Option<i64>,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub date: NaiveDate,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /transactions`
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    #[serde(alias = "account_id")]
    pub account_id: Option<Value>,
    #[serde(alias = "category_id")]
    pub category_id: Option<Value>,
    pub amount: Option<Value>,
    pub date: Option<Value>,
    pub note: Option<Value>,
}

/// Validated transaction fields; references are not yet resolved
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub account_id: i64,
    pub category_id: Option<i64>,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub note: Option<String>,
}

impl CreateTransactionRequest {
    pub fn validate(self) -> Result<NewTransaction, ApiError> {
        let (Some(account_id), Some(amount), Some(Value::String(date))) =
            (self.account_id, self.amount, self.date)
        else {
            return Err(ApiError::BadRequest(
                "accountId, amount, and date are required".to_string(),
            ));
        };
        if date.is_empty() {
            return Err(ApiError::BadRequest(
                "accountId, amount, and date are required".to_string(),
            ));
        }

        let account_id =
            validation::reference_id(&account_id).ok_or_else(|| validation::invalid("accountId"))?;
        let amount = validation::amount(&amount).ok_or_else(|| validation::invalid("amount"))?;
        let category_id = validation::optional_reference_id(self.category_id, "categoryId")?;
        let date = validation::date(&date).ok_or_else(|| {
            ApiError::BadRequest("date must be in YYYY-MM-DD format".to_string())
        })?;
        let note = validation::note(self.note)?;

        Ok(NewTransaction {
            account_id,
            category_id,
            amount,
            date,
            note,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validate(body: Value) -> Result<NewTransaction, ApiError> {
        serde_json::from_value::<CreateTransactionRequest>(body)
            .unwrap()
            .validate()
    }

    #[test]
    fn accepts_signed_amount_and_optional_fields() {
        let input = validate(json!({
            "accountId": 3,
            "amount": -20,
            "date": "2024-03-01",
        }))
        .unwrap();

        assert_eq!(input.account_id, 3);
        assert_eq!(input.amount, Decimal::from(-20));
        assert_eq!(input.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(input.category_id, None);
        assert_eq!(input.note, None);
    }

    #[test]
    fn accepts_snake_case_and_string_numbers() {
        let input = validate(json!({
            "account_id": "7",
            "category_id": "2",
            "amount": "12.50",
            "date": "2024-01-31",
            "note": "lunch",
        }))
        .unwrap();

        assert_eq!(input.account_id, 7);
        assert_eq!(input.category_id, Some(2));
        assert_eq!(input.amount, Decimal::new(1250, 2));
        assert_eq!(input.note.as_deref(), Some("lunch"));
    }

    #[test]
    fn reports_missing_required_fields() {
        for body in [
            json!({ "amount": 1, "date": "2024-01-01" }),
            json!({ "accountId": 1, "date": "2024-01-01" }),
            json!({ "accountId": 1, "amount": 1 }),
            json!({ "accountId": 1, "amount": 1, "date": 20240101 }),
            json!({ "accountId": null, "amount": 1, "date": "2024-01-01" }),
        ] {
            let error = validate(body).unwrap_err();
            assert_eq!(
                error.to_string(),
                "accountId, amount, and date are required"
            );
        }
    }

    #[test]
    fn reports_the_first_invalid_field() {
        let error = validate(json!({
            "accountId": "abc",
            "amount": 1,
            "date": "2024-01-01",
        }))
        .unwrap_err();
        assert_eq!(error.to_string(), "Invalid accountId");

        let error = validate(json!({
            "accountId": 1,
            "amount": "ten",
            "date": "2024-01-01",
        }))
        .unwrap_err();
        assert_eq!(error.to_string(), "Invalid amount");

        let error = validate(json!({
            "accountId": 1,
            "categoryId": "food",
            "amount": 1,
            "date": "2024-01-01",
        }))
        .unwrap_err();
        assert_eq!(error.to_string(), "Invalid categoryId");
    }

    #[test]
    fn rejects_non_iso_dates() {
        for date in ["2024/1/1", "01-01-2024", "2024-02-30"] {
            let error = validate(json!({ "accountId": 1, "amount": 1, "date": date })).unwrap_err();
            assert_eq!(error.to_string(), "date must be in YYYY-MM-DD format");
        }
    }
}
