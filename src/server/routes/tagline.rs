//! Tagline endpoint

use super::{bearer_token, message_response};
use crate::core::tagline::TaglineError;
use crate::server::state::AppState;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;
use tracing::{error, info, warn};

/// `GET /tagline`
///
/// The bearer token is the caller's session id.
pub async fn tagline(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    let Some(session) = bearer_token(&req) else {
        return message_response(StatusCode::UNAUTHORIZED, "Missing bearer token");
    };

    info!("Tagline request");
    match state.taglines.generate(session.as_str()).await {
        Ok(tagline) => HttpResponse::Ok().json(json!({ "tagline": tagline })),
        Err(e @ TaglineError::UnknownSession) => {
            warn!("Tagline requested for an unknown session");
            message_response(e.status(), e.user_message())
        }
        Err(e) => {
            error!(error = %e, "Tagline generation failed");
            message_response(e.status(), e.user_message())
        }
    }
}
