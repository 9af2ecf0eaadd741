//! Voice command endpoint

use super::{bearer_token, message_response};
use crate::core::audio::AudioUpload;
use crate::core::voice::ExecutionOutcome;
use crate::server::state::AppState;
use crate::utils::error::{Result, ServiceError};
use actix_multipart::Multipart;
use actix_web::http::StatusCode;
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{HttpRequest, HttpResponse, web};
use futures::StreamExt;
use serde_json::json;
use tracing::{error, info, warn};

const AUDIO_FIELD: &str = "audio";
const DEFAULT_FILENAME: &str = "audio.webm";

/// `POST /execute`
///
/// Accepts multipart/form-data with an `audio` file and runs it through the
/// voice command pipeline on behalf of the caller's bearer token.
pub async fn execute(
    state: web::Data<AppState>,
    req: HttpRequest,
    payload: Multipart,
) -> Result<HttpResponse> {
    let Some(token) = bearer_token(&req) else {
        return Ok(message_response(StatusCode::UNAUTHORIZED, "Missing bearer token"));
    };

    let upload = read_audio(payload, state.config.server().max_body_size).await?;
    info!(filename = %upload.filename, bytes = upload.len(), "Execute request");

    let outcome = state.executor.execute(upload, token).await.map_err(|e| {
        error!(error = %e, "Voice command pipeline failed");
        ServiceError::from(e)
    })?;

    let response = match outcome {
        ExecutionOutcome::NoSpeech => {
            message_response(StatusCode::UNPROCESSABLE_ENTITY, "No speech detected")
        }
        ExecutionOutcome::Unrecognized { .. } => {
            message_response(StatusCode::UNPROCESSABLE_ENTITY, "Command not recognized")
        }
        ExecutionOutcome::Succeeded {
            command,
            defaulted,
            body,
        } => with_command_headers(HttpResponse::Ok().json(body), &command, defaulted),
        ExecutionOutcome::DispatchFailed {
            command,
            defaulted,
            error,
        } => {
            warn!(command = %command, error = %error, "Downstream call failed");
            with_command_headers(
                HttpResponse::BadGateway().json(error.envelope()),
                &command,
                defaulted,
            )
        }
        ExecutionOutcome::Defaulted {
            command,
            descriptor,
        } => with_command_headers(
            HttpResponse::Ok().json(json!({
                "dispatched": false,
                "command": &command,
                "descriptor": descriptor,
            })),
            &command,
            true,
        ),
    };
    Ok(response)
}

/// Collect the `audio` field, skipping every other field
async fn read_audio(mut payload: Multipart, max_size: usize) -> Result<AudioUpload> {
    let mut upload: Option<AudioUpload> = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| {
            error!("Error reading multipart field: {}", e);
            ServiceError::bad_request(format!("Invalid multipart data: {}", e))
        })?;

        let is_audio = field.name() == Some(AUDIO_FIELD);
        if !is_audio || upload.is_some() {
            while field.next().await.is_some() {}
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_FILENAME)
            .to_string();

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let bytes = chunk.map_err(|e| {
                error!("Error reading audio chunk: {}", e);
                ServiceError::bad_request("Error reading audio file")
            })?;
            if data.len() + bytes.len() > max_size {
                return Err(ServiceError::bad_request(format!(
                    "Audio file exceeds {} bytes",
                    max_size
                )));
            }
            data.extend_from_slice(&bytes);
        }
        upload = Some(AudioUpload::new(filename, data));
    }

    match upload {
        Some(upload) if !upload.is_empty() => Ok(upload),
        _ => Err(ServiceError::bad_request("No audio file provided")),
    }
}

fn with_command_headers(mut response: HttpResponse, command: &str, defaulted: bool) -> HttpResponse {
    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(command) {
        headers.insert(HeaderName::from_static("x-command"), value);
    }
    headers.insert(
        HeaderName::from_static("x-command-defaulted"),
        HeaderValue::from_static(if defaulted { "true" } else { "false" }),
    );
    response
}
