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
    models::CreateCategoryRequest,
    state::AppState,
    validation::parse_id,
};

pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(list_categories)
                .post(create_category)
                .fallback(not_found),
        )
        .route("/categories/:id", get(get_category).fallback(not_found))
}

pub async fn list_categories(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let categories = state.category_service.list(user.id).await?;
    Ok(Json(categories))
}

pub async fn create_category(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    JsonBody(payload): JsonBody<CreateCategoryRequest>,
) -> ApiResult<impl IntoResponse> {
    let input = payload.validate()?;
    let category = state.category_service.create(user.id, input).await?;
    Ok(created(category))
}

pub async fn get_category(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id, "category")?;
    let category = state
        .category_service
        .find(id, user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Category not found".to_string()))?;
    Ok(Json(category))
}
