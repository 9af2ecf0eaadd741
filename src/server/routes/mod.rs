//! HTTP route modules

pub mod execute;
pub mod tagline;

use crate::core::voice::BearerToken;
use crate::server::handlers::{health_check, test};
use actix_web::http::{StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;

/// Register every endpoint of the service
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/test", web::get().to(test))
        .route("/health", web::get().to(health_check))
        .route("/tagline", web::get().to(tagline::tagline))
        .route("/execute", web::post().to(execute::execute));
}

/// Bearer credential from the `Authorization` header
pub(crate) fn bearer_token(req: &HttpRequest) -> Option<BearerToken> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()
        .and_then(BearerToken::from_header_value)
}

/// `{"message": ...}` body used by the client-facing endpoints
pub(crate) fn message_response(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(json!({ "message": message }))
}
