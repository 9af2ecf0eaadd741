//! Error handling integration tests
//!
//! Component errors flow into `ServiceError` and its HTTP mapping.

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;
    use tuneline::core::audio::TranscriptionError;
    use tuneline::core::llm::LlmError;
    use tuneline::core::music::MusicError;
    use tuneline::core::tagline::TaglineError;
    use tuneline::core::voice::{DispatchError, FillError, VoiceError};
    use tuneline::utils::error::ServiceError;

    #[test]
    fn test_classification_failure_is_bad_gateway() {
        let err: ServiceError = VoiceError::Classification(LlmError::EmptyResponse).into();
        assert_eq!(err.error_response().status().as_u16(), 502);
    }

    #[test]
    fn test_generation_timeout_is_gateway_timeout() {
        let err: ServiceError =
            VoiceError::Filling(FillError::Backend(LlmError::Timeout("60s".to_string()))).into();
        assert!(matches!(err, ServiceError::Timeout(_)));
        assert_eq!(err.error_response().status().as_u16(), 504);
    }

    #[test]
    fn test_rejected_dispatch_is_validation() {
        let err: ServiceError = DispatchError::Rejected("file:///etc/passwd".to_string()).into();
        assert_eq!(err.error_response().status().as_u16(), 400);
    }

    #[test]
    fn test_unknown_session_is_unauthorized() {
        let err = TaglineError::UnknownSession;
        assert_eq!(err.status().as_u16(), 401);
        assert_eq!(err.user_message(), "Unknown session");
    }

    #[test]
    fn test_spotify_failures_hide_upstream_detail() {
        let err = TaglineError::Refresh(MusicError::RefreshRejected {
            status: 400,
            body: "invalid_grant".to_string(),
        });
        assert_eq!(err.status().as_u16(), 500);
        assert_eq!(err.user_message(), "Error refreshing Spotify access token");
        assert!(!err.user_message().contains("invalid_grant"));
    }

    #[test]
    fn test_transcription_io_error_is_internal() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "tmp is read-only");
        let err: ServiceError = TranscriptionError::Io(io).into();
        let response = err.error_response();
        assert_eq!(response.status().as_u16(), 500);
    }

    #[test]
    fn test_dispatch_envelope_keeps_upstream_text() {
        let err = DispatchError::Status {
            status: 404,
            body: "{\"detail\":\"Not found\"}".to_string(),
        };
        assert_eq!(
            err.envelope(),
            serde_json::json!({"error": "{\"detail\":\"Not found\"}"})
        );
    }
}
