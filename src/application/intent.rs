//! # Intent Classifier
//!
//! Fixed-vocabulary classification of normalized inbound text. Classification is
//! exact-match only; anything outside the vocabularies is `Other` and its meaning
//! depends on the session phase (city capture or fallback).

/// Recognized greeting phrases.
pub const GREETINGS: &[&str] = &[
    "hola",
    "buenos días",
    "buenas tardes",
    "buenas noches",
    "hey",
    "ola",
];

/// Recognized gratitude phrases.
pub const GRATITUDE: &[&str] = &["gracias", "muchas gracias", "thanks"];

const AFFIRMATIONS: &[&str] = &["si", "sí"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Gratitude,
    Affirmation,
    Negation,
    Other,
}

/// Classify normalized (trimmed, lowercased) text.
pub fn classify(text: &str) -> Intent {
    if GREETINGS.contains(&text) {
        Intent::Greeting
    } else if GRATITUDE.contains(&text) {
        Intent::Gratitude
    } else if AFFIRMATIONS.contains(&text) {
        Intent::Affirmation
    } else if text == "no" {
        Intent::Negation
    } else {
        Intent::Other
    }
}

/// True for non-empty, purely numeric text. Used to reject digit strings where
/// a city name was expected.
pub fn is_numeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_greetings() {
        assert_eq!(classify("hola"), Intent::Greeting);
        assert_eq!(classify("buenos días"), Intent::Greeting);
        assert_eq!(classify("hey"), Intent::Greeting);
        assert_eq!(classify("ola"), Intent::Greeting);
    }

    #[test]
    fn test_classify_gratitude() {
        assert_eq!(classify("gracias"), Intent::Gratitude);
        assert_eq!(classify("muchas gracias"), Intent::Gratitude);
        assert_eq!(classify("thanks"), Intent::Gratitude);
    }

    #[test]
    fn test_classify_affirmation_both_spellings() {
        assert_eq!(classify("si"), Intent::Affirmation);
        assert_eq!(classify("sí"), Intent::Affirmation);
    }

    #[test]
    fn test_classify_negation() {
        assert_eq!(classify("no"), Intent::Negation);
    }

    #[test]
    fn test_classify_city_names_as_other() {
        assert_eq!(classify("quito"), Intent::Other);
        assert_eq!(classify("hola que tal"), Intent::Other);
        assert_eq!(classify(""), Intent::Other);
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("12345"));
        assert!(!is_numeric("quito"));
        assert!(!is_numeric("12a"));
        assert!(!is_numeric(""));
    }
}
