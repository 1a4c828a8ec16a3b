//! Registration and login

use auth::validation::validate_credentials;
use axum::{Json, Router, extract::State, response::IntoResponse, routing::post};

use super::{created, not_found};
use crate::{error::ApiResult, extract::JsonBody, models::CredentialsRequest, state::AppState};

pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register).fallback(not_found))
        .route("/auth/login", post(login).fallback(not_found))
}

/// Create a user; responds with the public projection only
pub async fn register(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CredentialsRequest>,
) -> ApiResult<impl IntoResponse> {
    let credentials = validate_credentials(payload.email(), payload.password())?;
    let user = state.auth_service.register(credentials).await?;

    Ok(created(user))
}

/// Exchange credentials for a bearer token
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CredentialsRequest>,
) -> ApiResult<impl IntoResponse> {
    let credentials = validate_credentials(payload.email(), payload.password())?;
    let grant = state.auth_service.login(credentials).await?;

    Ok(Json(grant))
}
