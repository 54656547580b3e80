//! ChatGPT conversation scenarios

use assert_matches::assert_matches;
use GptBuddy::handlers::flows::APOLOGY;
use GptBuddy::services::MAX_MESSAGE_CHARS;
use GptBuddy::state::{ButtonTag, Command, FlowState, GptState};
use GptBuddy::utils::errors::GatewayErrorKind;

use crate::helpers::{Rendered, TestContext, ORIGIN_MESSAGE};

#[tokio::test]
async fn test_gpt_conversation_round_trip() {
    let ctx = TestContext::new();

    ctx.command(Command::Start).await;
    ctx.press("menu:gpt").await;
    assert_eq!(ctx.state().await, FlowState::Gpt(GptState::Active));
    assert_matches!(
        ctx.presenter.rendered().last(),
        Some(Rendered::Edited { message_id, .. }) if *message_id == ORIGIN_MESSAGE
    );

    ctx.gateway.reply("4");
    ctx.say("What is 2+2?").await;

    let request = ctx.gateway.last_request().unwrap();
    assert_eq!(request.user_text, "What is 2+2?");
    assert_eq!(request.system_instruction, None);

    let answer = ctx.presenter.last_reply().unwrap();
    assert!(answer.text.contains('4'));
    assert_eq!(
        answer.keyboard.unwrap().tags(),
        vec![ButtonTag::GptContinue, ButtonTag::GptFinish]
    );
    assert_eq!(ctx.state().await, FlowState::Gpt(GptState::Active));

    ctx.press("gpt:finish").await;
    assert_eq!(ctx.state().await, FlowState::Idle);
    let menu = ctx.presenter.last_reply().unwrap();
    assert_eq!(menu.keyboard.unwrap().tags().len(), 4);
}

#[tokio::test]
async fn test_indicator_is_replaced_by_answer() {
    let ctx = TestContext::new();
    ctx.command(Command::Gpt).await;
    ctx.presenter.take();

    ctx.gateway.reply("Rust is a systems programming language.");
    ctx.say("What is Rust?").await;

    let rendered = ctx.presenter.take();
    assert_eq!(rendered.len(), 3);
    assert_eq!(rendered[0], Rendered::Typing);
    let indicator = match &rendered[1] {
        Rendered::Sent { message_id, .. } => *message_id,
        other => panic!("expected processing indicator, got {:?}", other),
    };
    assert_matches!(&rendered[2], Rendered::Edited { message_id, .. } if *message_id == indicator);
}

#[tokio::test]
async fn test_gateway_failure_renders_one_apology_and_keeps_state() {
    let ctx = TestContext::new();
    ctx.command(Command::Gpt).await;
    ctx.presenter.take();

    ctx.gateway.fail(GatewayErrorKind::RateLimit);
    ctx.say("What is 2+2?").await;

    let apologies = ctx
        .presenter
        .texts()
        .into_iter()
        .filter(|text| text == APOLOGY)
        .count();
    assert_eq!(apologies, 1);
    assert_eq!(ctx.state().await, FlowState::Gpt(GptState::Active));

    // the user can simply try again
    ctx.gateway.reply("4");
    ctx.say("What is 2+2?").await;
    assert!(ctx.presenter.last_reply().unwrap().text.contains('4'));
    assert_eq!(ctx.gateway.requests().len(), 2);
}

#[tokio::test]
async fn test_continue_prompts_for_next_question() {
    let ctx = TestContext::new();
    ctx.command(Command::Gpt).await;
    ctx.presenter.take();

    ctx.press("gpt:continue").await;

    let rendered = ctx.presenter.take();
    assert_eq!(rendered.len(), 1);
    assert_matches!(&rendered[0], Rendered::Sent { .. });
    assert_eq!(ctx.state().await, FlowState::Gpt(GptState::Active));
    assert!(ctx.gateway.requests().is_empty());
}

#[tokio::test]
async fn test_gateway_reply_is_html_escaped() {
    let ctx = TestContext::new();
    ctx.command(Command::Gpt).await;

    ctx.gateway.reply("Use <b>tags</b> & entities");
    ctx.say("How do I make text bold?").await;

    let answer = ctx.presenter.last_reply().unwrap();
    assert!(answer.text.contains("&lt;b&gt;tags&lt;/b&gt; &amp; entities"));
}

#[tokio::test]
async fn test_uneditable_indicator_is_deleted_and_answer_resent() {
    let ctx = TestContext::new();
    ctx.command(Command::Gpt).await;
    ctx.presenter.take();
    ctx.presenter.reject_edits();

    ctx.gateway.reply("4");
    ctx.say("What is 2+2?").await;

    let rendered = ctx.presenter.take();
    assert_eq!(rendered.len(), 4);
    let indicator = match &rendered[1] {
        Rendered::Sent { message_id, .. } => *message_id,
        other => panic!("expected processing indicator, got {:?}", other),
    };
    assert_eq!(rendered[2], Rendered::Deleted { message_id: indicator });
    assert_matches!(&rendered[3], Rendered::Sent { reply, .. } if reply.text.contains('4'));
    assert_eq!(ctx.state().await, FlowState::Gpt(GptState::Active));
}

#[tokio::test]
async fn test_oversized_answer_is_cut_to_fit_one_message() {
    let ctx = TestContext::new();
    ctx.command(Command::Gpt).await;
    ctx.presenter.take();

    ctx.gateway.reply(&"if a < b && c > d { x(); }\n".repeat(130));
    ctx.say("Show me a long snippet").await;

    let rendered = ctx.presenter.take();
    assert_matches!(rendered.last(), Some(Rendered::Edited { .. }));
    let answer = rendered.last().and_then(Rendered::reply).cloned().unwrap();
    assert!(answer.text.chars().count() <= MAX_MESSAGE_CHARS);
    assert!(answer.text.starts_with("🤖 <b>ChatGPT:</b>"));
    assert!(answer.text.contains("if a &lt; b &amp;&amp; c &gt; d"));
    assert!(answer.text.ends_with('…'));
    assert_eq!(
        answer.keyboard.unwrap().tags(),
        vec![ButtonTag::GptContinue, ButtonTag::GptFinish]
    );
    assert_eq!(ctx.state().await, FlowState::Gpt(GptState::Active));
}
