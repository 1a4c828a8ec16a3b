//! Authentication middleware for bearer token validation

use auth::UserId;
use axum::{
    body::Body,
    extract::State,
    http::{Request, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::{error::ApiError, state::AppState};

/// Authenticated caller, inserted into request extensions by [`auth_middleware`]
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: UserId,
}

/// Authentication middleware
///
/// Rejects the request with 401 unless it carries `Authorization: Bearer
/// <token>` with a token this process issued and that has not expired.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(&req)?.to_owned();

    let id = state.auth_service.verify_token(&token).map_err(|e| {
        debug!(error = %e, "Rejected bearer token");
        ApiError::from(e)
    })?;

    req.extensions_mut().insert(AuthUser { id });

    Ok(next.run(req).await)
}

fn bearer_token<B>(req: &Request<B>) -> Result<&str, ApiError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .ok_or_else(|| {
            ApiError::Unauthorized("Authorization header missing or invalid".to_string())
        })?
        .trim();

    if token.is_empty() {
        return Err(ApiError::Unauthorized("Token missing".to_string()));
    }

    Ok(token)
}
