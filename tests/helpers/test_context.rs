//! Test context for router scenarios
//!
//! Wires a [`Router`] to a recording presenter and a scripted gateway and
//! offers one-line helpers for the user's side of a conversation.

use std::sync::Arc;

use teloxide::types::{ChatId, MessageId};

use GptBuddy::handlers::{Event, Router};
use GptBuddy::services::ServiceFactory;
use GptBuddy::state::{Command, FlowState, SessionStore};

use super::gateway_mock::ScriptedGateway;
use super::presenter_mock::RecordingPresenter;

pub const TEST_USER_ID: i64 = 123456789;
pub const TEST_CHAT_ID: ChatId = ChatId(123456789);

/// Message the test user taps buttons on
pub const ORIGIN_MESSAGE: MessageId = MessageId(42);

pub struct TestContext {
    pub router: Router,
    pub presenter: Arc<RecordingPresenter>,
    pub gateway: Arc<ScriptedGateway>,
}

impl TestContext {
    pub fn new() -> Self {
        let presenter = Arc::new(RecordingPresenter::new());
        let gateway = Arc::new(ScriptedGateway::new());
        let services = ServiceFactory::with_collaborators(gateway.clone(), presenter.clone());

        Self {
            router: Router::new(services, SessionStore::new()),
            presenter,
            gateway,
        }
    }

    pub async fn command(&self, command: Command) {
        self.router
            .dispatch(Event::command(TEST_USER_ID, TEST_CHAT_ID, command))
            .await
            .expect("command dispatch failed");
    }

    pub async fn press(&self, data: &str) {
        self.router
            .dispatch(Event::button(TEST_USER_ID, TEST_CHAT_ID, Some(ORIGIN_MESSAGE), data))
            .await
            .expect("button dispatch failed");
    }

    pub async fn say(&self, text: &str) {
        self.router
            .dispatch(Event::text(TEST_USER_ID, TEST_CHAT_ID, text))
            .await
            .expect("text dispatch failed");
    }

    pub async fn state(&self) -> FlowState {
        self.router.sessions().load(TEST_USER_ID).await.state
    }
}
