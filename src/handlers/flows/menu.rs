//! Main menu and help

use teloxide::utils::command::BotCommands;

use super::FlowContext;
use crate::services::{Keyboard, Reply};
use crate::state::{ButtonTag, Command, FlowState};
use crate::utils::errors::Result;
use crate::utils::helpers::escape_html;

const WELCOME: &str = "🎉 <b>Welcome to GptBuddy!</b>\n\nChoose one of the features below:";

pub fn menu_keyboard() -> Keyboard {
    Keyboard::new()
        .button("🎲 Random fact", ButtonTag::OpenFact)
        .button("🤖 ChatGPT", ButtonTag::OpenGpt)
        .button("👥 Talk to a persona", ButtonTag::OpenPersona)
        .button("🧠 Quiz", ButtonTag::OpenQuiz)
}

pub fn main_menu() -> Reply {
    Reply::text(WELCOME).with_keyboard(menu_keyboard())
}

pub fn help() -> Reply {
    let commands = Command::descriptions().to_string();
    Reply::text(format!(
        "ℹ️ <b>GptBuddy help</b>\n\n{}\n\nUse the buttons under each reply to continue or go back to the menu.",
        escape_html(&commands)
    ))
}

pub async fn show_menu(ctx: &FlowContext<'_>, next: FlowState) -> Result<Option<FlowState>> {
    ctx.show(&main_menu()).await?;
    Ok(Some(next))
}

pub async fn show_help(ctx: &FlowContext<'_>, next: FlowState) -> Result<Option<FlowState>> {
    ctx.send(&help()).await?;
    Ok(Some(next))
}
