//! # Console Chat Adapter
//!
//! Implements the `ChatTransport` trait for a local terminal session. Replies
//! are printed to stdout; structured choices are rendered as a numbered list
//! and can be picked by number or by label.

use async_trait::async_trait;

use crate::domain::traits::ChatTransport;
use crate::domain::types::{Choice, Reply};

#[derive(Clone)]
pub struct ConsoleChat {
    session_id: String,
}

impl ConsoleChat {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
        }
    }
}

#[async_trait]
impl ChatTransport for ConsoleChat {
    fn session_id(&self) -> String {
        self.session_id.clone()
    }

    async fn send_reply(&self, reply: &Reply) -> Result<(), String> {
        tracing::debug!("Bot replying to {}: {}", self.session_id, reply.text);
        println!("\n{}", reply.text);
        for (i, choice) in reply.choices.iter().enumerate() {
            println!("  [{}] {}", i + 1, choice.label);
        }
        Ok(())
    }
}

/// Resolve typed input against the last rendered choices: a 1-based number or a
/// case-insensitive label picks the choice; anything else is free text.
pub fn match_choice<'a>(choices: &'a [Choice], input: &str) -> Option<&'a Choice> {
    let input = input.trim();
    if let Ok(index) = input.parse::<usize>() {
        if index >= 1 {
            return choices.get(index - 1);
        }
    }
    choices
        .iter()
        .find(|c| c.label.eq_ignore_ascii_case(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities() -> Vec<Choice> {
        vec![
            Choice::new("Quito", "quito"),
            Choice::new("Guayaquil", "guayaquil"),
        ]
    }

    #[test]
    fn test_match_choice_by_number() {
        let choices = cities();
        assert_eq!(match_choice(&choices, "2").map(|c| c.value.as_str()), Some("guayaquil"));
        assert!(match_choice(&choices, "0").is_none());
        assert!(match_choice(&choices, "3").is_none());
    }

    #[test]
    fn test_match_choice_by_label_ignores_case() {
        let choices = cities();
        assert_eq!(match_choice(&choices, "quito").map(|c| c.value.as_str()), Some("quito"));
        assert_eq!(match_choice(&choices, " QUITO ").map(|c| c.value.as_str()), Some("quito"));
    }

    #[test]
    fn test_free_text_is_not_a_choice() {
        let choices = cities();
        assert!(match_choice(&choices, "cuenca").is_none());
        assert!(match_choice(&[], "1").is_none());
    }
}
