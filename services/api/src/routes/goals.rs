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
    models::CreateGoalRequest,
    state::AppState,
    validation::parse_id,
};

pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/goals",
            get(list_goals).post(create_goal).fallback(not_found),
        )
        .route("/goals/:id", get(get_goal).fallback(not_found))
}

pub async fn list_goals(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let goals = state.goal_service.list(user.id).await?;
    Ok(Json(goals))
}

pub async fn create_goal(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    JsonBody(payload): JsonBody<CreateGoalRequest>,
) -> ApiResult<impl IntoResponse> {
    let input = payload.validate()?;
    let goal = state.goal_service.create(user.id, input).await?;
    Ok(created(goal))
}

pub async fn get_goal(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "goal")?;
    let goal = state
        .goal_service
        .find(id, user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Goal not found".to_string()))?;
    Ok(Json(goal))
}
