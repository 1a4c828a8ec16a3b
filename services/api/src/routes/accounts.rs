//! Account endpoints

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
    models::CreateAccountRequest,
    state::AppState,
    validation::parse_id,
};

pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/accounts",
            get(list_accounts).post(create_account).fallback(not_found),
        )
        .route("/accounts/:id", get(get_account).fallback(not_found))
}

pub async fn list_accounts(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let accounts = state.account_service.list(user.id).await?;
    Ok(Json(accounts))
}

pub async fn create_account(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    JsonBody(payload): JsonBody<CreateAccountRequest>,
) -> ApiResult<impl IntoResponse> {
    let input = payload.validate()?;
    let account = state.account_service.create(user.id, input).await?;
    Ok(created(account))
}

pub async fn get_account(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "account")?;
    let account = state
        .account_service
        .find(id, user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Account not found".to_string()))?;
    Ok(Json(account))
}
