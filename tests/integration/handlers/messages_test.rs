//! Text and command adapters only act on private chats

use serde_json::json;
use teloxide::types::Message;

use GptBuddy::handlers::{handle_command, handle_message};
use GptBuddy::state::{Command, FlowState, GptState};

use crate::helpers::{TestContext, TEST_USER_ID};

fn private_chat() -> serde_json::Value {
    json!({ "id": TEST_USER_ID, "type": "private", "first_name": "Test" })
}

fn group_chat() -> serde_json::Value {
    json!({ "id": -1001234567890_i64, "type": "supergroup", "title": "Test group" })
}

fn text_message(chat: serde_json::Value, text: &str) -> Message {
    serde_json::from_value(json!({
        "message_id": 7,
        "date": 1_700_000_000,
        "chat": chat,
        "from": { "id": TEST_USER_ID, "is_bot": false, "first_name": "Test" },
        "text": text,
    }))
    .expect("valid message JSON")
}

#[tokio::test]
async fn test_private_text_reaches_the_router() {
    let ctx = TestContext::new();
    handle_command(&ctx.router, text_message(private_chat(), "/gpt"), Command::Gpt)
        .await
        .unwrap();
    assert_eq!(ctx.state().await, FlowState::Gpt(GptState::Active));

    ctx.gateway.reply("4");
    handle_message(&ctx.router, text_message(private_chat(), "What is 2+2?"))
        .await
        .unwrap();

    assert_eq!(ctx.gateway.requests().len(), 1);
}

#[tokio::test]
async fn test_group_chat_is_ignored_by_both_adapters() {
    let ctx = TestContext::new();

    handle_command(&ctx.router, text_message(group_chat(), "/gpt"), Command::Gpt)
        .await
        .unwrap();
    handle_message(&ctx.router, text_message(group_chat(), "What is 2+2?"))
        .await
        .unwrap();

    assert!(ctx.presenter.rendered().is_empty());
    assert!(ctx.gateway.requests().is_empty());
    assert_eq!(ctx.state().await, FlowState::Idle);
}

#[tokio::test]
async fn test_unknown_command_text_is_not_free_text() {
    let ctx = TestContext::new();
    handle_command(&ctx.router, text_message(private_chat(), "/gpt"), Command::Gpt)
        .await
        .unwrap();
    ctx.presenter.take();

    handle_message(&ctx.router, text_message(private_chat(), "/unknown"))
        .await
        .unwrap();

    assert!(ctx.presenter.rendered().is_empty());
    assert!(ctx.gateway.requests().is_empty());
}
