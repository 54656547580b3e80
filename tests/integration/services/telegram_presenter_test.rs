//! Telegram presenter against a mock Bot API

use serial_test::serial;
use teloxide::types::{ChatId, MessageId};

use GptBuddy::services::{Keyboard, Presenter, Reply, TelegramPresenter};
use GptBuddy::state::ButtonTag;
use GptBuddy::utils::errors::GptBuddyError;

use crate::helpers::TelegramMockServer;

const CHAT: i64 = 123456789;

#[tokio::test]
#[serial]
async fn test_send_uses_html_and_inline_keyboard() {
    let mock = TelegramMockServer::new().await;
    mock.mock_send_message(321, CHAT).await;
    let presenter = TelegramPresenter::new(mock.bot());

    let reply = Reply::text("<b>Hello</b>").with_keyboard(Keyboard::new().button("🏠 Finish", ButtonTag::GptFinish));
    let message_id = presenter.send(ChatId(CHAT), &reply).await.unwrap();

    assert_eq!(message_id, MessageId(321));

    let requests = mock.requests_for("sendMessage").await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["parse_mode"], "HTML");
    assert_eq!(requests[0]["text"], "<b>Hello</b>");
    assert_eq!(
        requests[0]["reply_markup"]["inline_keyboard"][0][0]["callback_data"],
        "gpt:finish"
    );
}

#[tokio::test]
#[serial]
async fn test_edit_and_typing() {
    let mock = TelegramMockServer::new().await;
    mock.mock_edit_message_text(55, CHAT).await;
    mock.mock_send_chat_action().await;
    let presenter = TelegramPresenter::new(mock.bot());

    presenter.typing(ChatId(CHAT)).await.unwrap();
    presenter
        .edit(ChatId(CHAT), MessageId(55), &Reply::text("Updated"))
        .await
        .unwrap();

    let actions = mock.requests_for("sendChatAction").await;
    assert_eq!(actions[0]["action"], "typing");

    let edits = mock.requests_for("editMessageText").await;
    assert_eq!(edits[0]["message_id"], 55);
    assert_eq!(edits[0]["text"], "Updated");
}

#[tokio::test]
#[serial]
async fn test_api_error_is_telegram_error() {
    let mock = TelegramMockServer::new().await;
    mock.mock_edit_message_text_error().await;
    let presenter = TelegramPresenter::new(mock.bot());

    let result = presenter.edit(ChatId(CHAT), MessageId(1), &Reply::text("x")).await;

    assert!(matches!(result, Err(GptBuddyError::Telegram(_))));
}

#[tokio::test]
#[serial]
async fn test_delete_message() {
    let mock = TelegramMockServer::new().await;
    mock.mock_delete_message().await;
    let presenter = TelegramPresenter::new(mock.bot());

    presenter.delete(ChatId(CHAT), MessageId(77)).await.unwrap();

    let deletes = mock.requests_for("deleteMessage").await;
    assert_eq!(deletes.len(), 1);
    assert_eq!(deletes[0]["message_id"], 77);
}
