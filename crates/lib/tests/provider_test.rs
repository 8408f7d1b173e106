//! # AI Provider Tests
//!
//! Exercises the Gemini and local providers against a `wiremock` server:
//! request shape, response parsing, upstream errors, and the guarantee that
//! nothing is sent without a credential.

mod common;

use common::{full_parameters, setup_tracing};
use edital::providers::ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider};
use edital::{EditalGenerator, ErrorKind, PromptError, ProviderConfig, ReferenceContext};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GEMINI_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

fn gemini_config(server: &MockServer, api_key: Option<&str>) -> ProviderConfig {
    ProviderConfig {
        api_url: Some(format!("{}{GEMINI_PATH}", server.uri())),
        api_key: api_key.map(String::from),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_gemini_success() {
    // --- 1. Arrange ---
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{ "parts": [{ "text": "Olá" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "# EDITAL" }, { "text": "\n\nCorpo." }] }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider =
        GeminiProvider::new(format!("{}{GEMINI_PATH}", server.uri()), "test-key".into()).unwrap();

    // --- 2. Act ---
    let result = provider.generate("Olá").await;

    // --- 3. Assert ---
    assert_eq!(result.unwrap(), "# EDITAL\n\nCorpo.");
}

#[tokio::test]
async fn test_gemini_api_error_message_is_surfaced() {
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT"
            }
        })))
        .mount(&server)
        .await;

    let generator =
        EditalGenerator::from_config(&gemini_config(&server, Some("bad-key")), None).unwrap();
    let err = generator
        .generate(&full_parameters(), &ReferenceContext::new())
        .await
        .unwrap_err();

    match &err {
        PromptError::AiApi { status, message } => {
            assert_eq!(*status, 400);
            assert_eq!(message, "API key not valid. Please pass a valid API key.");
        }
        other => panic!("expected AiApi error, got {other:?}"),
    }
    assert_eq!(err.kind(), ErrorKind::Upstream);
    assert!(err.to_string().contains("API key not valid"));
}

#[tokio::test]
async fn test_gemini_non_json_error_body_is_kept_raw() {
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let provider =
        GeminiProvider::new(format!("{}{GEMINI_PATH}", server.uri()), "k".into()).unwrap();
    let err = provider.generate("prompt").await.unwrap_err();

    assert!(matches!(
        err,
        PromptError::AiApi { status: 503, ref message } if message == "upstream unavailable"
    ));
}

#[tokio::test]
async fn test_gemini_without_candidates_is_empty_response() {
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .mount(&server)
        .await;

    let provider =
        GeminiProvider::new(format!("{}{GEMINI_PATH}", server.uri()), "k".into()).unwrap();
    let err = provider.generate("prompt").await.unwrap_err();

    assert!(matches!(err, PromptError::EmptyResponse));
}

#[tokio::test]
async fn test_missing_credential_sends_nothing() {
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = EditalGenerator::from_config(&gemini_config(&server, None), Some(""));
    assert!(matches!(result, Err(PromptError::MissingApiKey)));

    let direct = GeminiProvider::new(format!("{}{GEMINI_PATH}", server.uri()), "  ".into());
    assert!(matches!(direct, Err(PromptError::MissingApiKey)));

    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}

#[tokio::test]
async fn test_interactive_key_overrides_configured_key() {
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(query_param("key", "typed-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let generator =
        EditalGenerator::from_config(&gemini_config(&server, Some("env-key")), Some("typed-key"))
            .unwrap();
    let document = generator
        .generate(&full_parameters(), &ReferenceContext::new())
        .await
        .unwrap();

    assert_eq!(document.body, "ok");
}

#[tokio::test]
async fn test_transport_failure_is_classified() {
    setup_tracing();
    // Nothing listens on port 9 of the loopback interface.
    let provider = GeminiProvider::new("http://127.0.0.1:9/generate".into(), "k".into()).unwrap();
    let err = provider.generate("prompt").await.unwrap_err();

    assert!(matches!(err, PromptError::AiRequest(_)));
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn test_local_provider_chat_completion() {
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer local-key"))
        .and(body_partial_json(json!({
            "model": "llama3",
            "messages": [{ "role": "user", "content": "Redija o edital." }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "# EDITAL local" } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = LocalAiProvider::new(
        format!("{}/v1/chat/completions", server.uri()),
        Some("local-key".to_string()),
        Some("llama3".to_string()),
    )
    .unwrap();

    assert_eq!(provider.generate("Redija o edital.").await.unwrap(), "# EDITAL local");
}

#[tokio::test]
async fn test_local_provider_from_config_needs_no_key() {
    setup_tracing();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "rascunho" } }]
        })))
        .mount(&server)
        .await;

    let config = ProviderConfig {
        provider: "local".to_string(),
        api_url: Some(format!("{}/v1/chat/completions", server.uri())),
        model_name: "llama3".to_string(),
        ..Default::default()
    };
    let generator = EditalGenerator::from_config(&config, None).unwrap();
    let document = generator
        .generate(&full_parameters(), &ReferenceContext::new())
        .await
        .unwrap();

    assert_eq!(document.body, "rascunho");
}
