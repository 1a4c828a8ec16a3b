//! Ledger endpoints; listings are newest first

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
    models::CreateTransactionRequest,
    state::AppState,
    validation::parse_id,
};

pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/transactions",
            get(list_transactions)
                .post(create_transaction)
                .fallback(not_found),
        )
        .route(
            "/transactions/:id",
            get(get_transaction).fallback(not_found),
        )
}

pub async fn list_transactions(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let transactions = state.transaction_service.list(user.id).await?;
    Ok(Json(transactions))
}

pub async fn create_transaction(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    JsonBody(payload): JsonBody<CreateTransactionRequest>,
) -> ApiResult<impl IntoResponse> {
    let input = payload.validate()?;
    let transaction = state.transaction_service.create(user.id, input).await?;
    Ok(created(transaction))
}

pub async fn get_transaction(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "transaction")?;
    let transaction = state
        .transaction_service
        .find(id, user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Transaction not found".to_string()))?;
    Ok(Json(transaction))
}
