//! Mock Telegram API Server for testing
//!
//! Simulates the handful of Bot API methods the presenter uses, backed by
//! wiremock.

use serde_json::{json, Value};
use teloxide::Bot;
use wiremock::{
    matchers::{method, path_regex},
    Mock, MockServer, ResponseTemplate,
};

pub const TEST_BOT_TOKEN: &str = "12345:test_token";

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Bot whose requests go to this server
    pub fn bot(&self) -> Bot {
        let url = reqwest::Url::parse(&self.server.uri()).expect("mock server uri is a valid url");
        Bot::new(TEST_BOT_TOKEN).set_api_url(url)
    }

    fn method_path(api_method: &str) -> String {
        format!("/bot{}/{}", TEST_BOT_TOKEN, api_method)
    }

    async fn mount(&self, api_method: &str, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path_regex(format!("(?i)^{}$", regex::escape(&Self::method_path(api_method)))))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    fn message(message_id: i32, chat_id: i64, text: &str) -> Value {
        json!({
            "message_id": message_id,
            "from": {
                "id": 12345,
                "is_bot": true,
                "first_name": "GptBuddy",
                "username": "gptbuddy_bot"
            },
            "chat": {
                "id": chat_id,
                "first_name": "Test",
                "type": "private"
            },
            "date": 1640995200,
            "text": text
        })
    }

    /// Setup mock for sendMessage endpoint
    pub async fn mock_send_message(&self, message_id: i32, chat_id: i64) {
        let body = json!({ "ok": true, "result": Self::message(message_id, chat_id, "Test message") });
        self.mount("sendMessage", 200, body).await;
    }

    /// Setup mock for editMessageText endpoint
    pub async fn mock_edit_message_text(&self, message_id: i32, chat_id: i64) {
        let mut result = Self::message(message_id, chat_id, "Edited test message");
        result["edit_date"] = json!(1640995260);
        self.mount("editMessageText", 200, json!({ "ok": true, "result": result })).await;
    }

    /// Setup a failing editMessageText endpoint
    pub async fn mock_edit_message_text_error(&self) {
        let body = json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: message to edit not found"
        });
        self.mount("editMessageText", 400, body).await;
    }

    /// Setup mock for sendChatAction endpoint
    pub async fn mock_send_chat_action(&self) {
        self.mount("sendChatAction", 200, json!({ "ok": true, "result": true })).await;
    }

    /// Setup mock for deleteMessage endpoint
    pub async fn mock_delete_message(&self) {
        self.mount("deleteMessage", 200, json!({ "ok": true, "result": true })).await;
    }

    /// JSON bodies of the requests received for a Bot API method
    pub async fn requests_for(&self, api_method: &str) -> Vec<Value> {
        let expected = Self::method_path(api_method);
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.url.path().eq_ignore_ascii_case(&expected))
            .filter_map(|request| serde_json::from_slice(&request.body).ok())
            .collect()
    }
}
