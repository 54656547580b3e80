//! Conversation context management
//!
//! This module holds the per-user session: which flow the user is in, the
//! state within that flow, and the data scoped to it. Flow-scoped data lives
//! inside the flow's variant, so entering another flow drops it.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Persona, QuizQuestion, QuizTally, QuizTopic};

/// Conversation flows offered by the bot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowKind {
    Fact,
    Gpt,
    Persona,
    Quiz,
}

impl FlowKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FlowKind::Fact => "fact",
            FlowKind::Gpt => "gpt",
            FlowKind::Persona => "persona",
            FlowKind::Quiz => "quiz",
        }
    }
}

/// Position within a flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Step {
    Idle,
    Selecting,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FactState {
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GptState {
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PersonaState {
    Selecting,
    Active { persona: Persona },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum QuizState {
    Selecting {
        tally: QuizTally,
    },
    Active {
        topic: QuizTopic,
        tally: QuizTally,
        /// Question waiting for the user's answer
        pending: Option<QuizQuestion>,
    },
}

/// Where a user currently is
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum FlowState {
    #[default]
    Idle,
    Fact(FactState),
    Gpt(GptState),
    Persona(PersonaState),
    Quiz(QuizState),
}

impl FlowState {
    pub fn flow(&self) -> Option<FlowKind> {
        match self {
            FlowState::Idle => None,
            FlowState::Fact(_) => Some(FlowKind::Fact),
            FlowState::Gpt(_) => Some(FlowKind::Gpt),
            FlowState::Persona(_) => Some(FlowKind::Persona),
            FlowState::Quiz(_) => Some(FlowKind::Quiz),
        }
    }

    pub fn step(&self) -> Step {
        match self {
            FlowState::Idle => Step::Idle,
            FlowState::Fact(FactState::Active) => Step::Active,
            FlowState::Gpt(GptState::Active) => Step::Active,
            FlowState::Persona(PersonaState::Selecting) => Step::Selecting,
            FlowState::Persona(PersonaState::Active { .. }) => Step::Active,
            FlowState::Quiz(QuizState::Selecting { .. }) => Step::Selecting,
            FlowState::Quiz(QuizState::Active { .. }) => Step::Active,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, FlowState::Idle)
    }
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.flow() {
            Some(flow) => write!(f, "{}.{:?}", flow.as_str(), self.step()),
            None => write!(f, "Idle"),
        }
    }
}

/// Per-user session
#[derive(Debug, Clone, Serialize)]
pub struct UserSession {
    /// User ID this session belongs to
    pub user_id: i64,
    /// Current flow and state
    pub state: FlowState,
    /// When this session was last updated
    pub updated_at: DateTime<Utc>,
}

impl UserSession {
    /// Create a new idle session for a user
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            state: FlowState::Idle,
            updated_at: Utc::now(),
        }
    }

    pub fn current_flow(&self) -> Option<FlowKind> {
        self.state.flow()
    }

    /// Move to a new state
    pub fn enter(&mut self, state: FlowState) {
        self.state = state;
        self.updated_at = Utc::now();
    }
}
