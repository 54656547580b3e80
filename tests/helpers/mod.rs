//! Test helpers module
//!
//! This module provides utilities and helpers for testing the GptBuddy application.
//! It includes mock collaborators for the router and mock HTTP servers.

#![allow(dead_code)]

pub mod telegram_mock;
pub mod test_context;

pub use gateway_mock::*;
pub use presenter_mock::*;
pub use telegram_mock::*;
pub use test_context::*;
