//! Category models

use auth::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::{error::ApiError, validation};

/// A named classification for transactions and budgets
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    pub user_id: UserId,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub category_type: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /categories`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateCategoryRequest {
    pub name: Option<Value>,
    #[serde(rename = "type")]
    pub category_type: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub category_type: String,
}

impl CreateCategoryRequest {
    pub fn validate(self) -> Result<NewCategory, ApiError> {
        match (
            validation::text(self.name),
            validation::text(self.category_type),
        ) {
            (Some(name), Some(category_type)) => Ok(NewCategory {
                name,
                category_type,
            }),
            _ => Err(ApiError::BadRequest(
                "name and type are required".to_string(),
            )),
        }
    }
}
