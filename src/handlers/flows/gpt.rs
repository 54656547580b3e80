//! Open ChatGPT conversation

use super::{answer_body, FlowContext};
use crate::services::{CompletionRequest, Keyboard, Reply};
use crate::state::{ButtonTag, FlowKind, FlowState};
use crate::utils::errors::Result;

const INTRO: &str = "🤖 <b>ChatGPT</b>\n\nAsk me anything: explain a concept, help with code, \
                     suggest an idea. Just send your question as a message.";
const NEXT_QUESTION: &str = "✍️ Send your next question.";
const PROCESSING: &str = "🤔 Thinking... ⏳";

pub fn gpt_request(text: &str) -> CompletionRequest {
    CompletionRequest::new(text).with_limits(1000, 0.7)
}

fn answer_keyboard() -> Keyboard {
    Keyboard::new()
        .button("💬 Continue", ButtonTag::GptContinue)
        .button("🏠 Finish", ButtonTag::GptFinish)
}

fn finish_keyboard() -> Keyboard {
    Keyboard::new().button("🏠 Finish", ButtonTag::GptFinish)
}

pub async fn show_intro(ctx: &FlowContext<'_>, next: FlowState) -> Result<Option<FlowState>> {
    ctx.show(&Reply::text(INTRO).with_keyboard(finish_keyboard())).await?;
    Ok(Some(next))
}

pub async fn prompt_question(ctx: &FlowContext<'_>, next: FlowState) -> Result<Option<FlowState>> {
    ctx.send(&Reply::text(NEXT_QUESTION).with_keyboard(finish_keyboard())).await?;
    Ok(Some(next))
}

pub async fn ask(ctx: &FlowContext<'_>, next: FlowState, text: &str) -> Result<Option<FlowState>> {
    let outcome = ctx.ask(PROCESSING, gpt_request(text)).await?;

    match outcome.reply {
        Ok(answer) => {
            let reply = Reply::text(format!("🤖 <b>ChatGPT:</b>\n\n{}", answer_body(&answer)))
                .with_keyboard(answer_keyboard());
            ctx.replace(outcome.indicator, &reply).await?;
            Ok(Some(next))
        }
        Err(e) => {
            ctx.apologize(outcome.indicator, FlowKind::Gpt, &e, finish_keyboard()).await?;
            Ok(None)
        }
    }
}
