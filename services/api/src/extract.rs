//! Request extractors

use axum::extract::FromRequest;

use crate::error::ApiError;

/// JSON body whose rejections are reported as `{ "error": ... }` with 400
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
