#![allow(clippy::unwrap_used, clippy::expect_used)]

use edubot_core::{EdubotError, HistoryTurn, Mode, ProviderId, ProviderRequest};
use edubot_providers::{default_providers, AnswerProvider, ProviderResolver, ProvidersConfig};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper: a config where `id` has a key and points at the mock server.
fn config_for(server: &MockServer, id: ProviderId) -> ProvidersConfig {
    let mut config = ProvidersConfig::default();
    config.wikipedia.base_url = Some(server.uri());
    let settings = match id {
        ProviderId::Gemini => &mut config.gemini,
        ProviderId::Groq => &mut config.groq,
        ProviderId::Cohere => &mut config.cohere,
        ProviderId::HuggingFace => &mut config.huggingface,
        ProviderId::Wikipedia => &mut config.wikipedia,
        ProviderId::ChatGpt => &mut config.chatgpt,
        ProviderId::Claude => &mut config.claude,
    };
    settings.api_key = Some("test-key".into());
    settings.base_url = Some(server.uri());
    config
}

fn provider(config: &ProvidersConfig, id: ProviderId) -> Box<dyn AnswerProvider> {
    default_providers(config)
        .unwrap()
        .into_iter()
        .find(|p| p.id() == id)
        .unwrap()
}

fn request(question: &str, model: &str) -> ProviderRequest {
    ProviderRequest::new(question, Some(model), vec![HistoryTurn::user("earlier")]).unwrap()
}

// ---------------------------------------------------------------------------
// 1. Wire formats
// ---------------------------------------------------------------------------

#[tokio::test]
async fn groq_uses_openai_chat_format() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "llama-3.1-8b-instant",
            "max_tokens": 800
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "  Loops repeat code. "}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = ProviderResolver::from_config(&config_for(&server, ProviderId::Groq)).unwrap();
    let resp = resolver.resolve(&request("Explain loops", "groq")).await.unwrap();

    assert_eq!(resp.answer, "Loops repeat code.");
    assert_eq!(resp.mode, Mode::Live);
    assert_eq!(resp.provider, "groq");
}

#[tokio::test]
async fn claude_sends_version_header_and_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"content": [{"text": "Hi there"}]})),
        )
        .mount(&server)
        .await;

    let config = config_for(&server, ProviderId::Claude);
    let answer = provider(&config, ProviderId::Claude)
        .invoke("hello", &[])
        .await
        .unwrap();
    assert_eq!(answer.as_deref(), Some("Hi there"));
}

#[tokio::test]
async fn gemini_passes_key_as_query_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "Mitochondria."}]}}]
        })))
        .mount(&server)
        .await;

    let config = config_for(&server, ProviderId::Gemini);
    let answer = provider(&config, ProviderId::Gemini)
        .invoke("powerhouse of the cell?", &[])
        .await
        .unwrap();
    assert_eq!(answer.as_deref(), Some("Mitochondria."));
}

#[tokio::test]
async fn huggingface_reads_first_generated_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/mistralai/Mistral-7B-Instruct-v0.2"))
        .and(body_partial_json(json!({
            "inputs": "user: 2+2?\nassistant:",
            "parameters": {"return_full_text": false}
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"generated_text": " 4"}])),
        )
        .mount(&server)
        .await;

    let config = config_for(&server, ProviderId::HuggingFace);
    let answer = provider(&config, ProviderId::HuggingFace)
        .invoke("2+2?", &[])
        .await
        .unwrap();
    assert_eq!(answer.as_deref(), Some("4"));
}

#[tokio::test]
async fn missing_answer_field_yields_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"meta": {}})))
        .mount(&server)
        .await;

    let config = config_for(&server, ProviderId::Cohere);
    let answer = provider(&config, ProviderId::Cohere)
        .invoke("anything", &[])
        .await
        .unwrap();
    assert_eq!(answer.as_deref(), Some(edubot_providers::NO_ANSWER));
}

// ---------------------------------------------------------------------------
// 2. Failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_success_status_surfaces_provider_error_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}
        })))
        .mount(&server)
        .await;

    let resolver =
        ProviderResolver::from_config(&config_for(&server, ProviderId::ChatGpt)).unwrap();
    let err = resolver
        .resolve(&request("Explain loops", "chatgpt"))
        .await
        .unwrap_err();

    match err {
        EdubotError::ProviderFailure { provider, message } => {
            assert_eq!(provider, "chatgpt");
            assert!(message.contains("Incorrect API key provided"), "{message}");
        }
        other => panic!("Expected ProviderFailure, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_falls_back_to_status_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>down</html>"))
        .mount(&server)
        .await;

    let config = config_for(&server, ProviderId::Cohere);
    let err = provider(&config, ProviderId::Cohere)
        .invoke("anything", &[])
        .await
        .unwrap_err();
    assert!(err.detail().contains("503 Service Unavailable"), "{err}");
}

#[tokio::test]
async fn non_json_success_is_a_provider_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let config = config_for(&server, ProviderId::Claude);
    let err = provider(&config, ProviderId::Claude)
        .invoke("anything", &[])
        .await
        .unwrap_err();
    assert!(matches!(err, EdubotError::ProviderFailure { .. }));
}

#[tokio::test]
async fn slow_provider_hits_deadline() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"choices": [{"message": {"content": "late"}}]}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut config = config_for(&server, ProviderId::Groq);
    config.timeout_secs = 1;
    let err = provider(&config, ProviderId::Groq)
        .invoke("anything", &[])
        .await
        .unwrap_err();
    assert!(err.detail().contains("timed out"), "{err}");
}

// ---------------------------------------------------------------------------
// 3. Wikipedia
// ---------------------------------------------------------------------------

#[tokio::test]
async fn wikipedia_extract_is_attributed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/rest_v1/page/summary/Ada%20Lovelace"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Ada Lovelace",
            "extract": "Augusta Ada King was an English mathematician."
        })))
        .mount(&server)
        .await;

    let resolver =
        ProviderResolver::from_config(&config_for(&server, ProviderId::Wikipedia)).unwrap();
    let resp = resolver
        .resolve(&request("Who is Ada Lovelace", "cohere"))
        .await
        .unwrap();

    assert_eq!(resp.mode, Mode::Wikipedia);
    assert_eq!(resp.provider, "wikipedia");
    assert_eq!(
        resp.answer,
        "Augusta Ada King was an English mathematician.\n\nSource: Wikipedia"
    );
}

#[tokio::test]
async fn wikipedia_miss_falls_back_to_knowledge_base() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let resolver =
        ProviderResolver::from_config(&config_for(&server, ProviderId::Wikipedia)).unwrap();
    let resp = resolver
        .resolve(&request("What is photosynthesis?", "wikipedia"))
        .await
        .unwrap();

    assert_eq!(resp.mode, Mode::Mock);
    assert_eq!(resp.provider, "wikipedia");
    assert!(resp.answer.starts_with("Photosynthesis"));
}
