//! Normalized triggers
//!
//! Every incoming Telegram update that the bot reacts to is reduced to a
//! [`Trigger`]: a bot command, a button tag carried in callback data, or free
//! text. Button tags use a `scope:action[:argument]` callback-data format.

use std::fmt;

use teloxide::utils::command::BotCommands;

use crate::models::{Persona, QuizTopic};

/// All available bot commands
#[derive(BotCommands, Debug, Clone, Copy, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "GptBuddy commands:")]
pub enum Command {
    #[command(description = "Show the main menu")]
    Start,
    #[command(description = "Show help information")]
    Help,
    #[command(description = "Get a random fact")]
    Random,
    #[command(description = "Ask ChatGPT anything")]
    Gpt,
    #[command(description = "Talk to a famous persona")]
    Talk,
    #[command(description = "Take a quiz")]
    Quiz,
}

/// Inline button identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTag {
    MainMenu,
    OpenFact,
    OpenGpt,
    OpenPersona,
    OpenQuiz,
    FactMore,
    FactFinish,
    GptContinue,
    GptFinish,
    PersonaPick(Persona),
    PersonaContinue,
    PersonaChange,
    PersonaFinish,
    QuizTopic(QuizTopic),
    QuizNext,
    QuizChange,
    QuizFinish,
}

impl ButtonTag {
    /// Parse callback data; unknown data yields `None`
    pub fn parse(data: &str) -> Option<Self> {
        let parts: Vec<&str> = data.split(':').collect();

        let tag = match parts.as_slice() {
            ["menu", "main"] => ButtonTag::MainMenu,
            ["menu", "fact"] => ButtonTag::OpenFact,
            ["menu", "gpt"] => ButtonTag::OpenGpt,
            ["menu", "persona"] => ButtonTag::OpenPersona,
            ["menu", "quiz"] => ButtonTag::OpenQuiz,
            ["fact", "more"] => ButtonTag::FactMore,
            ["fact", "finish"] => ButtonTag::FactFinish,
            ["gpt", "continue"] => ButtonTag::GptContinue,
            ["gpt", "finish"] => ButtonTag::GptFinish,
            ["persona", "pick", key] => ButtonTag::PersonaPick(Persona::from_key(key)?),
            ["persona", "continue"] => ButtonTag::PersonaContinue,
            ["persona", "change"] => ButtonTag::PersonaChange,
            ["persona", "finish"] => ButtonTag::PersonaFinish,
            ["quiz", "topic", key] => ButtonTag::QuizTopic(QuizTopic::from_key(key)?),
            ["quiz", "next"] => ButtonTag::QuizNext,
            ["quiz", "change"] => ButtonTag::QuizChange,
            ["quiz", "finish"] => ButtonTag::QuizFinish,
            _ => return None,
        };

        Some(tag)
    }

    /// Callback data carried by the button
    pub fn callback_data(&self) -> String {
        match self {
            ButtonTag::MainMenu => "menu:main".to_string(),
            ButtonTag::OpenFact => "menu:fact".to_string(),
            ButtonTag::OpenGpt => "menu:gpt".to_string(),
            ButtonTag::OpenPersona => "menu:persona".to_string(),
            ButtonTag::OpenQuiz => "menu:quiz".to_string(),
            ButtonTag::FactMore => "fact:more".to_string(),
            ButtonTag::FactFinish => "fact:finish".to_string(),
            ButtonTag::GptContinue => "gpt:continue".to_string(),
            ButtonTag::GptFinish => "gpt:finish".to_string(),
            ButtonTag::PersonaPick(persona) => format!("persona:pick:{}", persona.key()),
            ButtonTag::PersonaContinue => "persona:continue".to_string(),
            ButtonTag::PersonaChange => "persona:change".to_string(),
            ButtonTag::PersonaFinish => "persona:finish".to_string(),
            ButtonTag::QuizTopic(topic) => format!("quiz:topic:{}", topic.key()),
            ButtonTag::QuizNext => "quiz:next".to_string(),
            ButtonTag::QuizChange => "quiz:change".to_string(),
            ButtonTag::QuizFinish => "quiz:finish".to_string(),
        }
    }
}

/// A normalized event payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    Command(Command),
    Button(ButtonTag),
    Text(String),
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Command(command) => write!(f, "command:{:?}", command),
            Trigger::Button(tag) => write!(f, "button:{}", tag.callback_data()),
            Trigger::Text(_) => write!(f, "text"),
        }
    }
}
