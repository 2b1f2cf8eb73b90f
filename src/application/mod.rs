//! # Application Layer
//!
//! Contains the core conversational logic of the bot: the dialogue engine,
//! intent classification, and per-session state management.

pub mod engine;
pub mod intent;
pub mod session;
