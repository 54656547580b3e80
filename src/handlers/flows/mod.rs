//! Flow handlers
//!
//! Each flow module renders the effects of its transitions. [`execute`]
//! returns the state to commit, or `None` when a gateway failure means the
//! session must stay where it was.

pub mod fact;
pub mod gpt;
pub mod menu;
pub mod persona;
pub mod quiz;

use teloxide::types::{ChatId, MessageId};
use tracing::{debug, warn};

use crate::services::{CompletionRequest, Keyboard, Reply, ServiceFactory};
use crate::state::{Effect, FlowKind, FlowState, Transition};
use crate::utils::errors::{GatewayError, GatewayResult, Result};
use crate::utils::helpers::escape_html_truncated;
use crate::utils::logging::log_gateway_failure;

/// Shown in place of any failed gateway reply
pub const APOLOGY: &str =
    "😔 The assistant is temporarily unavailable. Please try again or return to the main menu.";

/// Room left for a gateway answer once a flow's header is added, well under
/// [`MAX_MESSAGE_CHARS`](crate::services::MAX_MESSAGE_CHARS)
pub const MAX_ANSWER_CHARS: usize = 3500;

/// Escape a gateway answer for display, cutting it to fit one message
pub fn answer_body(answer: &str) -> String {
    escape_html_truncated(answer, MAX_ANSWER_CHARS)
}

/// Everything a flow handler needs for one event
pub struct FlowContext<'a> {
    pub services: &'a ServiceFactory,
    pub user_id: i64,
    pub chat_id: ChatId,
    /// Message carrying the tapped button, if any
    pub origin: Option<MessageId>,
    /// State before the transition
    pub state: &'a FlowState,
}

/// Processing indicator plus the gateway's answer
pub struct GatewayOutcome {
    pub indicator: MessageId,
    pub reply: GatewayResult<String>,
}

impl<'a> FlowContext<'a> {
    /// Edit the origin message, or send a new one when there is none
    pub async fn show(&self, reply: &Reply) -> Result<MessageId> {
        if let Some(origin) = self.origin {
            match self.services.presenter.edit(self.chat_id, origin, reply).await {
                Ok(()) => return Ok(origin),
                Err(e) => {
                    debug!(user_id = self.user_id, error = %e, "Could not edit origin message, sending a new one");
                }
            }
        }

        self.send(reply).await
    }

    pub async fn send(&self, reply: &Reply) -> Result<MessageId> {
        self.services.presenter.send(self.chat_id, reply).await
    }

    /// Replace a previously rendered message
    ///
    /// If the message can no longer be edited it is deleted and the reply is
    /// sent as a new message.
    pub async fn replace(&self, message_id: MessageId, reply: &Reply) -> Result<()> {
        let Err(e) = self.services.presenter.edit(self.chat_id, message_id, reply).await else {
            return Ok(());
        };

        warn!(user_id = self.user_id, error = %e, "Could not replace message, resending");
        if let Err(e) = self.services.presenter.delete(self.chat_id, message_id).await {
            debug!(user_id = self.user_id, error = %e, "Failed to delete stale message");
        }
        self.send(reply).await?;
        Ok(())
    }

    /// Show the processing indicator and call the gateway
    pub async fn ask(&self, processing: &str, request: CompletionRequest) -> Result<GatewayOutcome> {
        if let Err(e) = self.services.presenter.typing(self.chat_id).await {
            debug!(user_id = self.user_id, error = %e, "Failed to send typing action");
        }

        let indicator = self.show(&Reply::text(processing)).await?;
        let reply = self.services.gateway.complete(&request).await;

        Ok(GatewayOutcome { indicator, reply })
    }

    /// Replace the indicator with the apology
    pub async fn apologize(
        &self,
        indicator: MessageId,
        flow: FlowKind,
        error: &GatewayError,
        retry: Keyboard,
    ) -> Result<()> {
        log_gateway_failure(self.user_id, flow.as_str(), error);
        self.replace(indicator, &Reply::text(APOLOGY).with_keyboard(retry)).await
    }
}

/// Carry out the effect of `transition`
pub async fn execute(ctx: &FlowContext<'_>, transition: Transition) -> Result<Option<FlowState>> {
    let Transition { next, effect } = transition;

    match effect {
        Effect::ShowMenu => menu::show_menu(ctx, next).await,
        Effect::ShowHelp => menu::show_help(ctx, next).await,
        Effect::FetchFact => fact::fetch_fact(ctx, next).await,
        Effect::ShowGptIntro => gpt::show_intro(ctx, next).await,
        Effect::AskGpt { text } => gpt::ask(ctx, next, &text).await,
        Effect::PromptGptQuestion => gpt::prompt_question(ctx, next).await,
        Effect::ShowPersonaPicker => persona::show_picker(ctx, next).await,
        Effect::GreetPersona { persona } => persona::greet(ctx, next, persona).await,
        Effect::AskPersona { persona, text } => persona::ask(ctx, next, persona, &text).await,
        Effect::PromptPersonaMessage { persona } => persona::prompt_message(ctx, next, persona).await,
        Effect::ShowQuizTopics { tally } => quiz::show_topics(ctx, next, tally).await,
        Effect::FetchQuizQuestion { topic } => quiz::fetch_question(ctx, next, topic).await,
        Effect::ShowVerdict { question, correct, tally } => {
            quiz::show_verdict(ctx, next, &question, correct, tally).await
        }
    }
}
