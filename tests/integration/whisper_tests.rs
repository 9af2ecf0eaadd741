//! Whisper backend through the lossy transcriber

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use tuneline::config::OpenAIConfig;
    use tuneline::core::audio::{AudioUpload, OpenAIWhisper, Transcriber};
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transcriber_for(server: &MockServer) -> Transcriber {
        let whisper = OpenAIWhisper::new(&OpenAIConfig {
            api_key: "sk-test".to_string(),
            api_base: format!("{}/v1/", server.uri()),
            ..OpenAIConfig::default()
        })
        .unwrap();
        Transcriber::new(Arc::new(whisper))
    }

    #[tokio::test]
    async fn test_transcription_text_is_trimmed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/audio/transcriptions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_string_contains("whisper-1"))
            .and(body_string_contains("name=\"response_format\""))
            .and(body_string_contains("filename=\"audio.m4a\""))
            .respond_with(ResponseTemplate::new(200).set_body_string("Create a post saying hi.\n"))
            .expect(1)
            .mount(&server)
            .await;

        let text = transcriber_for(&server)
            .transcribe(AudioUpload::new("voice note.m4a", b"....ftypM4A ".to_vec()))
            .await;
        assert_eq!(text.as_deref(), Some("Create a post saying hi."));
    }

    #[tokio::test]
    async fn test_backend_rejection_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/audio/transcriptions"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": {"message": "Invalid file format."}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = transcriber_for(&server)
            .transcribe(AudioUpload::new("clip.webm", vec![0u8; 64]))
            .await;
        assert!(text.is_none());
    }

    #[tokio::test]
    async fn test_silence_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("  \n"))
            .mount(&server)
            .await;

        let text = transcriber_for(&server)
            .transcribe(AudioUpload::new("clip.wav", vec![0u8; 64]))
            .await;
        assert!(text.is_none());
    }

    #[tokio::test]
    async fn test_unsupported_format_skips_backend() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("never"))
            .expect(0)
            .mount(&server)
            .await;

        let text = transcriber_for(&server)
            .transcribe(AudioUpload::new("notes.txt", b"hello".to_vec()))
            .await;
        assert!(text.is_none());
    }
}
