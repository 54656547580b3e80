//! Data models module
//!
//! Static catalogs and value types used by the conversation flows

pub mod persona;
pub mod quiz;

pub use persona::{Persona, PersonaProfile};
pub use quiz::{judge_answer, QuizQuestion, QuizTally, QuizTopic};
