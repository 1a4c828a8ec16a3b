//! API service routes

use axum::{
    Json, Router,
    extract::{MatchedPath, Request},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::{error::ApiError, middleware::auth_middleware, state::AppState};

mod accounts;
mod authentication;
mod budgets;
mod categories;
mod goals;
mod recurring_transactions;
mod transactions;

/// Create the router for the API service
///
/// Everything except `/health` and `/auth/*` requires a bearer token.
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .merge(accounts::router())
        .merge(categories::router())
        .merge(transactions::router())
        .merge(budgets::router())
        .merge(recurring_transactions::router())
        .merge(goals::router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let router = Router::new()
        .route("/health", get(health_check).fallback(not_found))
        .merge(authentication::router())
        .merge(protected_routes)
        .fallback(not_found)
        .with_state(state);

    add_tracing_layer(router)
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::info_span!("request", %method, %uri, matched_path)
        })
        // 5xx responses are already logged by `ApiError`
        .on_failure(());

    router.layer(tracing_layer)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "finance-api"
    }))
}

async fn not_found() -> ApiError {
    ApiError::NotFound("Not found".to_string())
}

/// 201 response carrying the created entity
fn created<T: serde::Serialize>(entity: T) -> impl IntoResponse {
    (StatusCode::CREATED, Json(entity))
}
