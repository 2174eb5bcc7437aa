pub mod assets;
pub mod meta_tags;
pub mod page;

use axum::{http::Uri, Json};
use serde_json::{json, Value};

use crate::error::AppError;

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "seo-meta-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Router fallback for unmatched paths.
pub async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "No route matched");
    AppError::NotFound(format!("No route for {}", uri.path()))
}
