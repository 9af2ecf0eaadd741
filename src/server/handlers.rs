//! HTTP route handlers

use actix_web::HttpResponse;
use serde_json::json;

/// Liveness probe kept for existing clients
pub async fn test() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Hello World" }))
}

/// Health check endpoint handler
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
