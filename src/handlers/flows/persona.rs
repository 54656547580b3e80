//! Conversation with a famous persona

use super::{answer_body, FlowContext};
use crate::models::Persona;
use crate::services::{CompletionRequest, Keyboard, Reply};
use crate::state::{ButtonTag, FlowKind, FlowState};
use crate::utils::errors::Result;

const PICKER: &str = "👥 <b>Talk to a persona</b>\n\nWho would you like to talk to?";

pub fn persona_request(persona: Persona, text: &str) -> CompletionRequest {
    CompletionRequest::new(text)
        .with_instruction(persona.profile().prompt)
        .with_limits(1000, 0.8)
}

pub fn picker_keyboard() -> Keyboard {
    let keyboard = Persona::ALL.iter().fold(Keyboard::new(), |keyboard, persona| {
        let profile = persona.profile();
        keyboard.button(format!("{} {}", profile.emoji, profile.name), ButtonTag::PersonaPick(*persona))
    });
    keyboard.button("🏠 Main menu", ButtonTag::PersonaFinish)
}

fn chat_keyboard() -> Keyboard {
    Keyboard::new()
        .button("🔄 Change persona", ButtonTag::PersonaChange)
        .button("🏠 Finish", ButtonTag::PersonaFinish)
}

fn answer_keyboard() -> Keyboard {
    Keyboard::new()
        .button("💬 Continue", ButtonTag::PersonaContinue)
        .button("🔄 Change persona", ButtonTag::PersonaChange)
        .button("🏠 Finish", ButtonTag::PersonaFinish)
}

pub async fn show_picker(ctx: &FlowContext<'_>, next: FlowState) -> Result<Option<FlowState>> {
    ctx.show(&Reply::text(PICKER).with_keyboard(picker_keyboard())).await?;
    Ok(Some(next))
}

pub async fn greet(ctx: &FlowContext<'_>, next: FlowState, persona: Persona) -> Result<Option<FlowState>> {
    let profile = persona.profile();
    let text = format!(
        "{} <b>{}</b>\n<i>Expert in {}</i>\n\nYou are now talking to {}. Send a message to start the conversation.",
        profile.emoji, profile.name, profile.specialty, profile.name
    );

    ctx.show(&Reply::text(text).with_keyboard(chat_keyboard())).await?;
    Ok(Some(next))
}

pub async fn prompt_message(ctx: &FlowContext<'_>, next: FlowState, persona: Persona) -> Result<Option<FlowState>> {
    let text = format!("✍️ Write your next message to {}.", persona.profile().name);
    ctx.send(&Reply::text(text).with_keyboard(chat_keyboard())).await?;
    Ok(Some(next))
}

pub async fn ask(ctx: &FlowContext<'_>, next: FlowState, persona: Persona, text: &str) -> Result<Option<FlowState>> {
    let profile = persona.profile();
    let processing = format!("{} {} is thinking... ⏳", profile.emoji, profile.name);
    let outcome = ctx.ask(&processing, persona_request(persona, text)).await?;

    match outcome.reply {
        Ok(answer) => {
            let reply = Reply::text(format!(
                "{} <b>{}:</b>\n\n{}",
                profile.emoji,
                profile.name,
                answer_body(&answer)
            ))
            .with_keyboard(answer_keyboard());
            ctx.replace(outcome.indicator, &reply).await?;
            Ok(Some(next))
        }
        Err(e) => {
            ctx.apologize(outcome.indicator, FlowKind::Persona, &e, chat_keyboard()).await?;
            Ok(None)
        }
    }
}
