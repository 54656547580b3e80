//! OpenAI gateway against a mock chat-completions endpoint

use assert_matches::assert_matches;
use serde_json::json;
use serial_test::serial;
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use GptBuddy::config::OpenAiConfig;
use GptBuddy::services::{CompletionGateway, CompletionRequest, OpenAiService};
use GptBuddy::utils::errors::{GatewayError, GatewayErrorKind};

async fn service_for(server: &MockServer) -> OpenAiService {
    let config = OpenAiConfig {
        api_key: "sk-test".to_string(),
        api_url: format!("{}/v1", server.uri()),
        model: "gpt-3.5-turbo".to_string(),
        timeout_seconds: 5,
        reply_language: None,
    };
    OpenAiService::new(&config).expect("Failed to create OpenAI service")
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

async fn mount_status(server: &MockServer, status: u16, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
#[serial]
async fn test_completion_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-3.5-turbo",
            "max_tokens": 1000,
            "messages": [
                { "role": "system", "content": "You are Albert Einstein" },
                { "role": "user", "content": "What is time?" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("  Time is relative.  \n")))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server).await;
    let request = CompletionRequest::new("What is time?").with_instruction("You are Albert Einstein");

    let reply = service.complete(&request).await.unwrap();
    assert_eq!(reply, "Time is relative.");
}

#[tokio::test]
#[serial]
async fn test_status_codes_are_classified() {
    let cases = [
        (429, GatewayErrorKind::RateLimit),
        (401, GatewayErrorKind::Auth),
        (503, GatewayErrorKind::Server),
        (400, GatewayErrorKind::InvalidRequest),
    ];

    for (status, kind) in cases {
        let server = MockServer::start().await;
        mount_status(&server, status, json!({ "error": { "message": "nope" } })).await;

        let service = service_for(&server).await;
        let error = service.complete(&CompletionRequest::new("Hi")).await.unwrap_err();
        assert_eq!(error.kind, kind, "status {}", status);
    }
}

#[tokio::test]
#[serial]
async fn test_empty_choices_is_empty_reply() {
    let server = MockServer::start().await;
    mount_status(&server, 200, json!({ "choices": [] })).await;

    let service = service_for(&server).await;
    let error = service.complete(&CompletionRequest::new("Hi")).await.unwrap_err();
    assert_matches!(error, GatewayError { kind: GatewayErrorKind::EmptyReply, .. });
}

#[tokio::test]
#[serial]
async fn test_blank_content_is_empty_reply() {
    let server = MockServer::start().await;
    mount_status(&server, 200, completion("   ")).await;

    let service = service_for(&server).await;
    let error = service.complete(&CompletionRequest::new("Hi")).await.unwrap_err();
    assert_eq!(error.kind, GatewayErrorKind::EmptyReply);
}

#[tokio::test]
#[serial]
async fn test_malformed_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let service = service_for(&server).await;
    let error = service.complete(&CompletionRequest::new("Hi")).await.unwrap_err();
    assert_eq!(error.kind, GatewayErrorKind::InvalidResponse);
}

#[tokio::test]
#[serial]
async fn test_unreachable_endpoint_is_network_error() {
    let config = OpenAiConfig {
        api_key: "sk-test".to_string(),
        api_url: "http://127.0.0.1:9".to_string(),
        timeout_seconds: 2,
        ..OpenAiConfig::default()
    };
    let service = OpenAiService::new(&config).unwrap();

    let error = service.complete(&CompletionRequest::new("Hi")).await.unwrap_err();
    assert_eq!(error.kind, GatewayErrorKind::Network);
}
