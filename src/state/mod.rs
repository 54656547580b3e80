//! State management module
//!
//! This module handles conversation state and the per-user session store

pub mod context;
pub mod flows;
pub mod storage;
pub mod triggers;

// Re-export commonly used state components
pub use context::{FactState, FlowKind, FlowState, GptState, PersonaState, QuizState, Step, UserSession};
pub use flows::{transition, Effect, Transition};
pub use storage::{SessionStats, SessionStore};
pub use triggers::{ButtonTag, Command, Trigger};
