//! Recurring transaction templates

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};

use super::{created, not_found};
use crate::{
    error::{ApiError, ApiResult},
    extract::JsonBody,
    middleware::AuthUser,
    models::CreateRecurringTransactionRequest,
    state::AppState,
    validation::parse_id,
};

pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/recurring-transactions",
            get(list_recurring_transactions)
                .post(create_recurring_transaction)
                .fallback(not_found),
        )
        .route(
            "/recurring-transactions/:id",
            get(get_recurring_transaction).fallback(not_found),
        )
}

pub async fn list_recurring_transactions(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let recurring_transactions = state.recurring_transaction_service.list(user.id).await?;
    Ok(Json(recurring_transactions))
}

pub async fn create_recurring_transaction(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    JsonBody(payload): JsonBody<CreateRecurringTransactionRequest>,
) -> ApiResult<impl IntoResponse> {
    let input = payload.validate()?;
    let recurring_transaction = state
        .recurring_transaction_service
        .create(user.id, input)
        .await?;
    Ok(created(recurring_transaction))
}

pub async fn get_recurring_transaction(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "recurring transaction")?;
    let recurring_transaction = state
        .recurring_transaction_service
        .find(id, user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Recurring transaction not found".to_string()))?;
    Ok(Json(recurring_transaction))
}
