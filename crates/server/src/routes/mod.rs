//! API route handlers
//!
//! Routes are organized by functionality:
//!
//! - `health`: Health checks, readiness, and metrics
//! - `items`: Reporting and looking up lost/found items
//! - `matching`: Match suggestions, per-item matches and pair comparison

pub mod health;
pub mod items;
pub mod matching;

use crate::error::ServerError;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info (GET /)
pub async fn api_info() -> impl IntoResponse {
    Json(json!({
        "name": "Recovr Server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/api/items",
            "/api/items/{id}",
            "/api/matching/suggestions",
            "/api/matching/item/{item_id}",
            "/api/matching/compare/{first_id}/{second_id}",
            "/health",
            "/ready",
            "/metrics"
        ]
    }))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
