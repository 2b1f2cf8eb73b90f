//! # Strings
//!
//! Centralized user-facing text and LLM prompt templates.

pub mod messages;
pub mod prompts;
