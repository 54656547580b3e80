//! Random fact flow

use rand::seq::SliceRandom;

use super::{answer_body, FlowContext};
use crate::services::{CompletionRequest, Keyboard, Reply};
use crate::state::{ButtonTag, FlowKind, FlowState};
use crate::utils::errors::Result;

const FACT_INSTRUCTION: &str = "You are an expert in surprising facts. Share exactly one accurate, \
     little-known and interesting fact in two or three sentences. No introductions, no lists.";

/// Knowledge areas mixed into the request so consecutive facts differ
const KNOWLEDGE_AREAS: &[&str] = &[
    "science",
    "history",
    "nature",
    "space",
    "technology",
    "art",
    "geography",
    "the human body",
    "animals",
    "mathematics",
];

const PROCESSING: &str = "🎲 Looking for an interesting fact... ⏳";

pub fn fact_request() -> CompletionRequest {
    let area = KNOWLEDGE_AREAS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("science");

    CompletionRequest::new(format!("Tell me an interesting fact about {}.", area))
        .with_instruction(FACT_INSTRUCTION)
        .with_limits(200, 0.8)
}

fn fact_keyboard() -> Keyboard {
    Keyboard::new()
        .button("🎲 Another fact", ButtonTag::FactMore)
        .button("🏠 Finish", ButtonTag::FactFinish)
}

/// Retry goes through the menu entry so it works from any state
fn retry_keyboard() -> Keyboard {
    Keyboard::new()
        .button("🔄 Try again", ButtonTag::OpenFact)
        .button("🏠 Main menu", ButtonTag::MainMenu)
}

pub async fn fetch_fact(ctx: &FlowContext<'_>, next: FlowState) -> Result<Option<FlowState>> {
    let outcome = ctx.ask(PROCESSING, fact_request()).await?;

    match outcome.reply {
        Ok(fact) => {
            let reply = Reply::text(format!("🧠 <b>Interesting fact:</b>\n\n{}", answer_body(&fact)))
                .with_keyboard(fact_keyboard());
            ctx.replace(outcome.indicator, &reply).await?;
            Ok(Some(next))
        }
        Err(e) => {
            ctx.apologize(outcome.indicator, FlowKind::Fact, &e, retry_keyboard()).await?;
            Ok(None)
        }
    }
}
