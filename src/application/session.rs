//! # Session State
//!
//! Defines the per-conversation dialogue state (`Session`) and the store mapping
//! session ids to live session records. Sessions are memory-only and created on
//! first access; they expire with the store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};
use tokio::sync::Mutex;

use crate::domain::types::WeatherSnapshot;

/// The single active interpretation of the next inbound message.
///
/// Replaces the original pair of independent booleans: at most one "waiting"
/// interpretation can apply to an incoming message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Next free-text message is treated as a city name. Default for fresh
    /// sessions.
    #[default]
    AwaitingCity,
    /// Next message answers "¿Quieres consultar otra ciudad? (sí/no)".
    AwaitingConfirmation,
    /// A lookup just succeeded; "sí" here requests clothing advice.
    Idle,
}

/// State for a single conversation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub phase: Phase,
    /// Most recent successful lookup; `None` until the first success. Failed
    /// lookups never overwrite it.
    pub last_weather: Option<WeatherSnapshot>,
}

/// Maps session ids to their session records.
///
/// Each record carries its own lock, so handling within one session is mutually
/// exclusive while distinct sessions proceed fully in parallel.
#[derive(Default)]
pub struct SessionStore {
    sessions: StdMutex<HashMap<String, Arc<Mutex<Session>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets or creates the session for an id.
    pub fn session(&self, id: &str) -> Arc<Mutex<Session>> {
        let mut sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());
        sessions
            .entry(id.to_string())
            .or_insert_with(Arc::default)
            .clone()
    }
}
