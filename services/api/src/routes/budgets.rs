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
    models::CreateBudgetRequest,
    state::AppState,
    validation::parse_id,
};

pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/budgets",
            get(list_budgets).post(create_budget).fallback(not_found),
        )
        .route("/budgets/:id", get(get_budget).fallback(not_found))
}

pub async fn list_budgets(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let budgets = state.budget_service.list(user.id).await?;
    Ok(Json(budgets))
}

pub async fn create_budget(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    JsonBody(payload): JsonBody<CreateBudgetRequest>,
) -> ApiResult<impl IntoResponse> {
    let input = payload.validate()?;
    let budget = state.budget_service.create(user.id, input).await?;
    Ok(created(budget))
}

pub async fn get_budget(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "budget")?;
    let budget = state
        .budget_service
        .find(id, user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Budget not found".to_string()))?;
    Ok(Json(budget))
}
