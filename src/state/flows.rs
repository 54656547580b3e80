//! Flow transition table
//!
//! [`transition`] is the single source of truth for which trigger is legal in
//! which state. It is a pure function: it decides the next state and the side
//! effect to run, and the handlers in `crate::handlers::flows` carry the
//! effect out and commit the state. A trigger with no rule yields `None` and
//! is ignored.

use crate::models::{judge_answer, Persona, QuizQuestion, QuizTally, QuizTopic};

use super::context::{FactState, FlowState, GptState, PersonaState, QuizState};
use super::triggers::{ButtonTag, Command, Trigger};

/// Side effect attached to a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ShowMenu,
    ShowHelp,
    FetchFact,
    ShowGptIntro,
    AskGpt { text: String },
    PromptGptQuestion,
    ShowPersonaPicker,
    GreetPersona { persona: Persona },
    AskPersona { persona: Persona, text: String },
    PromptPersonaMessage { persona: Persona },
    ShowQuizTopics { tally: QuizTally },
    FetchQuizQuestion { topic: QuizTopic },
    ShowVerdict {
        question: QuizQuestion,
        correct: bool,
        tally: QuizTally,
    },
}

impl Effect {
    /// Whether carrying out the effect calls the completion gateway
    pub fn calls_gateway(&self) -> bool {
        matches!(
            self,
            Effect::FetchFact
                | Effect::AskGpt { .. }
                | Effect::AskPersona { .. }
                | Effect::FetchQuizQuestion { .. }
        )
    }
}

/// Next state plus the effect that leads there
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: FlowState,
    pub effect: Effect,
}

impl Transition {
    fn to(next: FlowState, effect: Effect) -> Self {
        Self { next, effect }
    }

    fn menu() -> Self {
        Self::to(FlowState::Idle, Effect::ShowMenu)
    }
}

/// Look up the rule for `trigger` in `state`
pub fn transition(state: &FlowState, trigger: &Trigger) -> Option<Transition> {
    if let Some(entry) = entry_point(state, trigger) {
        return Some(entry);
    }

    let rule = match (state, trigger) {
        (FlowState::Fact(FactState::Active), Trigger::Button(ButtonTag::FactMore)) => {
            Transition::to(state.clone(), Effect::FetchFact)
        }
        (FlowState::Fact(FactState::Active), Trigger::Button(ButtonTag::FactFinish)) => {
            Transition::menu()
        }

        (FlowState::Gpt(GptState::Active), Trigger::Text(text)) => Transition::to(
            state.clone(),
            Effect::AskGpt { text: text.clone() },
        ),
        (FlowState::Gpt(GptState::Active), Trigger::Button(ButtonTag::GptContinue)) => {
            Transition::to(state.clone(), Effect::PromptGptQuestion)
        }
        (FlowState::Gpt(GptState::Active), Trigger::Button(ButtonTag::GptFinish)) => {
            Transition::menu()
        }

        (FlowState::Persona(PersonaState::Selecting), Trigger::Button(ButtonTag::PersonaPick(persona))) => {
            Transition::to(
                FlowState::Persona(PersonaState::Active { persona: *persona }),
                Effect::GreetPersona { persona: *persona },
            )
        }
        (FlowState::Persona(PersonaState::Active { persona }), Trigger::Text(text)) => {
            Transition::to(
                state.clone(),
                Effect::AskPersona { persona: *persona, text: text.clone() },
            )
        }
        (FlowState::Persona(PersonaState::Active { persona }), Trigger::Button(ButtonTag::PersonaContinue)) => {
            Transition::to(state.clone(), Effect::PromptPersonaMessage { persona: *persona })
        }
        (FlowState::Persona(PersonaState::Active { .. }), Trigger::Button(ButtonTag::PersonaChange)) => {
            Transition::to(FlowState::Persona(PersonaState::Selecting), Effect::ShowPersonaPicker)
        }
        (FlowState::Persona(_), Trigger::Button(ButtonTag::PersonaFinish)) => Transition::menu(),

        (FlowState::Quiz(QuizState::Selecting { tally }), Trigger::Button(ButtonTag::QuizTopic(topic))) => {
            Transition::to(
                FlowState::Quiz(QuizState::Active { topic: *topic, tally: *tally, pending: None }),
                Effect::FetchQuizQuestion { topic: *topic },
            )
        }
        (
            FlowState::Quiz(QuizState::Active { topic, tally, pending: Some(question) }),
            Trigger::Text(answer),
        ) => {
            let correct = judge_answer(&question.answer, answer);
            let tally = tally.record(correct);
            Transition::to(
                FlowState::Quiz(QuizState::Active { topic: *topic, tally, pending: None }),
                Effect::ShowVerdict { question: question.clone(), correct, tally },
            )
        }
        (FlowState::Quiz(QuizState::Active { topic, tally, .. }), Trigger::Button(ButtonTag::QuizNext)) => {
            Transition::to(
                FlowState::Quiz(QuizState::Active { topic: *topic, tally: *tally, pending: None }),
                Effect::FetchQuizQuestion { topic: *topic },
            )
        }
        (FlowState::Quiz(QuizState::Active { tally, .. }), Trigger::Button(ButtonTag::QuizChange)) => {
            Transition::to(
                FlowState::Quiz(QuizState::Selecting { tally: *tally }),
                Effect::ShowQuizTopics { tally: *tally },
            )
        }
        (FlowState::Quiz(_), Trigger::Button(ButtonTag::QuizFinish)) => Transition::menu(),

        _ => return None,
    };

    Some(rule)
}

/// Commands and main-menu buttons, legal in every state
fn entry_point(state: &FlowState, trigger: &Trigger) -> Option<Transition> {
    let rule = match trigger {
        Trigger::Command(Command::Start) | Trigger::Button(ButtonTag::MainMenu) => Transition::menu(),
        Trigger::Command(Command::Help) => Transition::to(state.clone(), Effect::ShowHelp),
        Trigger::Command(Command::Random) | Trigger::Button(ButtonTag::OpenFact) => {
            Transition::to(FlowState::Fact(FactState::Active), Effect::FetchFact)
        }
        Trigger::Command(Command::Gpt) | Trigger::Button(ButtonTag::OpenGpt) => {
            Transition::to(FlowState::Gpt(GptState::Active), Effect::ShowGptIntro)
        }
        Trigger::Command(Command::Talk) | Trigger::Button(ButtonTag::OpenPersona) => {
            Transition::to(FlowState::Persona(PersonaState::Selecting), Effect::ShowPersonaPicker)
        }
        Trigger::Command(Command::Quiz) | Trigger::Button(ButtonTag::OpenQuiz) => {
            let tally = QuizTally::default();
            Transition::to(
                FlowState::Quiz(QuizState::Selecting { tally }),
                Effect::ShowQuizTopics { tally },
            )
        }
        _ => return None,
    };

    Some(rule)
}

impl FlowState {
    /// Attach a freshly generated question to an active quiz state
    pub fn with_pending_question(self, question: QuizQuestion) -> Self {
        match self {
            FlowState::Quiz(QuizState::Active { topic, tally, .. }) => {
                FlowState::Quiz(QuizState::Active { topic, tally, pending: Some(question) })
            }
            other => other,
        }
    }
}
