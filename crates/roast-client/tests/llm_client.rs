use roast_client::OpenAiCritic;
use roast_core::error::AppError;
use roast_core::traits::Critic;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sse_body(chunks: &[&str]) -> String {
    let mut body = String::new();
    for chunk in chunks {
        body.push_str(&format!(
            "data: {}\n\n",
            json!({"choices": [{"delta": {"content": chunk}}]})
        ));
    }
    body.push_str("data: [DONE]\n\n");
    body
}

#[tokio::test]
async fn concatenates_streamed_delta_chunks() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_partial_json(json!({"model": "test-model", "stream": true})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(sse_body(&["A sharp", " critique", "."]), "text/event-stream"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let critic = OpenAiCritic::with_base_url("test-key", "test-model", &server.uri()).unwrap();
    let text = critic.complete("roast this feed").await.unwrap();

    assert_eq!(text, "A sharp critique.");
}

#[tokio::test]
async fn stops_at_done_marker() {
    let server = MockServer::start().await;

    let mut body = sse_body(&["before"]);
    // Anything after [DONE] must be ignored.
    body.push_str(&format!(
        "data: {}\n\n",
        json!({"choices": [{"delta": {"content": "after"}}]})
    ));

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .mount(&server)
        .await;

    let critic = OpenAiCritic::with_base_url("test-key", "test-model", &server.uri()).unwrap();
    let text = critic.complete("prompt").await.unwrap();

    assert_eq!(text, "before");
}

#[tokio::test]
async fn missing_api_key_is_a_configuration_error() {
    let err = OpenAiCritic::new("").unwrap_err();
    assert!(matches!(err, AppError::ConfigError(_)));
}

#[tokio::test]
async fn rate_limit_maps_to_rate_limit_exceeded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let critic = OpenAiCritic::with_base_url("test-key", "test-model", &server.uri()).unwrap();
    let err = critic.complete("prompt").await.unwrap_err();

    assert!(matches!(err, AppError::RateLimitExceeded));
}

#[tokio::test]
async fn server_error_surfaces_the_api_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": {"message": "overloaded"}})),
        )
        .mount(&server)
        .await;

    let critic = OpenAiCritic::with_base_url("test-key", "test-model", &server.uri()).unwrap();
    let err = critic.complete("prompt").await.unwrap_err();

    match err {
        AppError::LlmError {
            message,
            status_code,
            retryable,
        } => {
            assert_eq!(message, "overloaded");
            assert_eq!(status_code, 500);
            assert!(retryable);
        }
        other => panic!("expected LlmError, got {other:?}"),
    }
}
