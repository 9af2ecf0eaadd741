//! `GET /tagline` end to end

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{REFRESH_TOKEN, SESSION_ID};
    use crate::common::{FakeSpeechToText, ScriptedGenerator, TestApp};
    use actix_web::{test, web};
    use serde_json::{Value, json};
    use tuneline::core::sessions::SessionStore;
    use tuneline::server::server::HttpServer;
    use wiremock::matchers::{body_string_contains, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_top_artists(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/v1/me/top/artists"))
            .and(query_param("limit", "10"))
            .and(query_param("time_range", "short_term"))
            .and(header("authorization", "Bearer fresh-access"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    {"name": "Slowdive", "genres": ["shoegaze", "dream pop"]},
                    {"name": "Beach House", "genres": ["dream pop", "indie"]}
                ]
            })))
            .expect(1)
            .mount(server)
            .await;
    }

    fn tagline_request() -> test::TestRequest {
        test::TestRequest::get()
            .uri("/tagline")
            .insert_header(("Authorization", format!("Bearer {}", SESSION_ID)))
    }

    #[actix_web::test]
    async fn test_tagline_with_refreshable_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/token"))
            .and(body_string_contains(format!("refresh_token={}", REFRESH_TOKEN)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "fresh-access",
                "token_type": "Bearer",
                "expires_in": 3600,
                "scope": "user-top-read"
            })))
            .expect(1)
            .mount(&server)
            .await;
        mount_top_artists(&server).await;

        let fixture = TestApp::new(
            &server.uri(),
            ScriptedGenerator::new().with_completion("\n\n\"Lost in the haze, found in the echo\""),
            FakeSpeechToText::says("unused"),
        );
        let app = test::init_service(HttpServer::create_app(web::Data::new(fixture.state()))).await;

        let resp = test::call_service(&app, tagline_request().to_request()).await;
        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"tagline": "Lost in the haze, found in the echo"}));

        let stored = fixture.sessions.get(SESSION_ID).await.unwrap().unwrap();
        assert_eq!(stored.access_token, "fresh-access");
        assert_eq!(fixture.generator.completion_calls(), 1);
    }

    #[actix_web::test]
    async fn test_rejected_refresh_returns_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_grant",
                "error_description": "Refresh token revoked"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let fixture = TestApp::new(
            &server.uri(),
            ScriptedGenerator::new(),
            FakeSpeechToText::says("unused"),
        );
        let app = test::init_service(HttpServer::create_app(web::Data::new(fixture.state()))).await;

        let resp = test::call_service(&app, tagline_request().to_request()).await;
        assert_eq!(resp.status(), 500);

        let body = test::read_body(resp).await;
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(!text.contains(REFRESH_TOKEN));
        assert!(!text.contains("invalid_grant"));

        let body: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(body, json!({"message": "Error refreshing Spotify access token"}));
        assert_eq!(fixture.generator.completion_calls(), 0);
    }

    #[actix_web::test]
    async fn test_missing_access_token_in_refresh_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token_type": "Bearer"})))
            .mount(&server)
            .await;

        let fixture = TestApp::new(&server.uri(), ScriptedGenerator::new(), FakeSpeechToText::says(""));
        let app = test::init_service(HttpServer::create_app(web::Data::new(fixture.state()))).await;

        let resp = test::call_service(&app, tagline_request().to_request()).await;
        assert_eq!(resp.status(), 500);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"message": "Error retrieving Spotify access token"}));
    }

    #[actix_web::test]
    async fn test_top_artists_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "fresh-access"})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/me/top/artists"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let fixture = TestApp::new(&server.uri(), ScriptedGenerator::new(), FakeSpeechToText::says(""));
        let app = test::init_service(HttpServer::create_app(web::Data::new(fixture.state()))).await;

        let resp = test::call_service(&app, tagline_request().to_request()).await;
        assert_eq!(resp.status(), 500);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"message": "Error retrieving top genres from Spotify"}));
    }

    #[actix_web::test]
    async fn test_unknown_session() {
        let server = MockServer::start().await;
        let fixture = TestApp::new(&server.uri(), ScriptedGenerator::new(), FakeSpeechToText::says(""));
        let app = test::init_service(HttpServer::create_app(web::Data::new(fixture.state()))).await;

        let req = test::TestRequest::get()
            .uri("/tagline")
            .insert_header(("Authorization", "Bearer someone-else"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"message": "Unknown session"}));
    }
}
