//! Health, static page, and routing-mismatch handlers.

use axum::{
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::types::ApiError;

/// GET / - static route-finder page (opaque UI artifact)
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// OPTIONS on any known route - CORS headers come from the layer
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Unmatched method on a known route
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Unmatched path; OPTIONS is still answered with 204
pub async fn fallback(method: Method) -> Response {
    if method == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        ApiError::NotFound.into_response()
    }
}
