//! Quiz flow
//!
//! The gateway writes the question together with the expected answer; the
//! user's reply is judged locally by the transition table.

use super::{answer_body, FlowContext};
use crate::models::{QuizQuestion, QuizTally, QuizTopic};
use crate::services::{CompletionRequest, Keyboard, Reply};
use crate::state::{ButtonTag, FlowKind, FlowState, QuizState};
use crate::utils::errors::{GatewayError, Result};

const QUIZ_INSTRUCTION: &str = "You are a quiz host. Ask exactly one question with a short, \
     unambiguous answer of one to three words. Reply in exactly two lines:\n\
     QUESTION: <the question>\n\
     ANSWER: <the answer>";

const PROCESSING: &str = "🧠 Preparing a question... ⏳";

pub fn quiz_request(topic: QuizTopic) -> CompletionRequest {
    CompletionRequest::new(format!("Ask me a quiz question about {}.", topic.subject()))
        .with_instruction(QUIZ_INSTRUCTION)
        .with_limits(300, 0.7)
}

pub fn topics_keyboard() -> Keyboard {
    let keyboard = QuizTopic::ALL
        .iter()
        .fold(Keyboard::new(), |keyboard, topic| keyboard.button(topic.title(), ButtonTag::QuizTopic(*topic)));
    keyboard.button("🏠 Main menu", ButtonTag::QuizFinish)
}

fn question_keyboard() -> Keyboard {
    Keyboard::new()
        .button("➡️ Next question", ButtonTag::QuizNext)
        .button("🔄 Change topic", ButtonTag::QuizChange)
        .button("🏠 Finish", ButtonTag::QuizFinish)
}

/// Retry options depend on where the quiz was when the gateway failed
fn retry_keyboard(state: &FlowState) -> Keyboard {
    match state {
        FlowState::Quiz(QuizState::Active { .. }) => question_keyboard(),
        _ => topics_keyboard(),
    }
}

pub async fn show_topics(ctx: &FlowContext<'_>, next: FlowState, tally: QuizTally) -> Result<Option<FlowState>> {
    let mut text = String::from("🧠 <b>Quiz</b>\n\nChoose a topic:");
    if tally.answered > 0 {
        text.push_str(&format!("\n\n📊 Score so far: {}", tally));
    }

    ctx.show(&Reply::text(text).with_keyboard(topics_keyboard())).await?;
    Ok(Some(next))
}

pub async fn fetch_question(ctx: &FlowContext<'_>, next: FlowState, topic: QuizTopic) -> Result<Option<FlowState>> {
    let outcome = ctx.ask(PROCESSING, quiz_request(topic)).await?;

    let parsed = outcome.reply.and_then(|reply| {
        QuizQuestion::parse(&reply)
            .ok_or_else(|| GatewayError::invalid_response("reply is not in QUESTION/ANSWER format"))
    });

    match parsed {
        Ok(question) => {
            let text = format!(
                "{}\n\n❓ {}\n\n<i>Send your answer as a message.</i>",
                topic.title(),
                answer_body(&question.question)
            );
            ctx.replace(outcome.indicator, &Reply::text(text).with_keyboard(question_keyboard()))
                .await?;
            Ok(Some(next.with_pending_question(question)))
        }
        Err(e) => {
            ctx.apologize(outcome.indicator, FlowKind::Quiz, &e, retry_keyboard(ctx.state))
                .await?;
            Ok(None)
        }
    }
}

pub async fn show_verdict(
    ctx: &FlowContext<'_>,
    next: FlowState,
    question: &QuizQuestion,
    correct: bool,
    tally: QuizTally,
) -> Result<Option<FlowState>> {
    let verdict = if correct {
        "✅ <b>Correct!</b>".to_string()
    } else {
        format!("❌ <b>Not quite.</b> The answer is: <b>{}</b>", answer_body(&question.answer))
    };
    let text = format!("{}\n\n📊 Score: {}", verdict, tally);

    ctx.send(&Reply::text(text).with_keyboard(question_keyboard())).await?;
    Ok(Some(next))
}
