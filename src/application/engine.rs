//! # Dialogue Engine
//!
//! The per-session state machine. Classifies a normalized inbound message,
//! performs at most one collaborator lookup, mutates the session, and returns
//! the replies for the transport to render.
//!
//! Rule evaluation is ordered and first-match-wins: greeting, gratitude,
//! negation, affirmation, city capture, fallback. The literal "no" always takes
//! the confirmation-toggle interpretation before the generic fallback.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::application::intent::{self, Intent};
use crate::application::session::{Phase, Session};
use crate::domain::config::SystemConfig;
use crate::domain::traits::{AdvisorProvider, WeatherProvider};
use crate::domain::types::{Choice, LookupError, Reply};
use crate::strings::messages;

pub struct DialogueEngine {
    weather: Arc<dyn WeatherProvider>,
    advisor: Arc<dyn AdvisorProvider>,
    lookup_timeout: Duration,
    quick_cities: Vec<String>,
}

impl DialogueEngine {
    pub fn new(
        system: &SystemConfig,
        weather: Arc<dyn WeatherProvider>,
        advisor: Arc<dyn AdvisorProvider>,
    ) -> Self {
        Self {
            weather,
            advisor,
            lookup_timeout: Duration::from_secs(system.lookup_timeout_secs),
            quick_cities: system.quick_cities.clone(),
        }
    }

    /// Start-of-conversation surface: welcome banner plus the configured quick
    /// cities as structured choices. Always resets the session to city capture.
    pub fn greet(&self, session: &mut Session) -> Vec<Reply> {
        session.phase = Phase::AwaitingCity;
        let choices = self
            .quick_cities
            .iter()
            .map(|city| Choice::new(city.clone(), city.to_lowercase()))
            .collect();
        vec![Reply::with_choices(messages::START_PROMPT, choices)]
    }

    /// Main free-text entry point. Never fails: every error class is folded
    /// into a corrective reply and the session survives all of them.
    pub async fn handle_message(&self, session: &mut Session, raw: &str) -> Vec<Reply> {
        let text = raw.trim().to_lowercase();
        let intent = intent::classify(&text);
        tracing::info!(?intent, phase = ?session.phase, "Dialogue dispatching message");

        match intent {
            Intent::Greeting => {
                session.phase = Phase::AwaitingCity;
                vec![Reply::text(messages::WELCOME)]
            }
            Intent::Gratitude => {
                session.phase = Phase::AwaitingConfirmation;
                vec![Reply::text(messages::GRATITUDE_REPLY)]
            }
            Intent::Negation => {
                if session.phase == Phase::AwaitingConfirmation {
                    session.phase = Phase::AwaitingCity;
                    vec![Reply::text(messages::TOPIC_CLOSED)]
                } else {
                    session.phase = Phase::AwaitingConfirmation;
                    vec![Reply::text(messages::ASK_ANOTHER_CITY)]
                }
            }
            Intent::Affirmation => match session.phase {
                Phase::AwaitingConfirmation => {
                    session.phase = Phase::AwaitingCity;
                    vec![Reply::text(messages::NEXT_CITY_PROMPT)]
                }
                Phase::Idle if session.last_weather.is_some() => self.recommend(session).await,
                // "si" while a city is expected is captured as a literal city
                // name, exactly like any other free text.
                Phase::AwaitingCity => self.capture_city(session, &text).await,
                Phase::Idle => vec![Reply::text(messages::FALLBACK)],
            },
            Intent::Other => match session.phase {
                Phase::AwaitingCity => self.capture_city(session, &text).await,
                _ => vec![Reply::text(messages::FALLBACK)],
            },
        }
    }

    /// Structured-choice entry point: the city arrives as data, so the free-text
    /// classifier and the numeric-input check are skipped entirely.
    pub async fn handle_city_selection(&self, session: &mut Session, city: &str) -> Vec<Reply> {
        let city = city.trim().to_lowercase();
        tracing::info!(phase = ?session.phase, "Dialogue dispatching city selection '{city}'");
        self.lookup_city(session, &city).await
    }

    async fn capture_city(&self, session: &mut Session, city: &str) -> Vec<Reply> {
        if intent::is_numeric(city) {
            return vec![Reply::text(messages::NUMERIC_INPUT_WARNING)];
        }
        self.lookup_city(session, city).await
    }

    /// Shared success/failure handling for both entry points. Failures leave the
    /// session untouched; success stores the snapshot and moves to `Idle`.
    async fn lookup_city(&self, session: &mut Session, city: &str) -> Vec<Reply> {
        let result = match timeout(self.lookup_timeout, self.weather.current_weather(city)).await {
            Ok(result) => result,
            Err(_) => Err(LookupError::Unavailable(format!(
                "lookup for '{city}' timed out"
            ))),
        };

        match result {
            Ok(report) => {
                tracing::info!(
                    "Weather stored for '{}': {}°C, {}% humidity",
                    report.city,
                    report.temperature,
                    report.humidity
                );
                session.last_weather = Some(report.snapshot());
                session.phase = Phase::Idle;
                vec![Reply::text(messages::weather_with_advice_prompt(
                    &report.summary,
                ))]
            }
            Err(LookupError::NotFound { suggestion }) => {
                tracing::info!("City '{city}' not recognized by weather provider");
                vec![Reply::text(suggestion)]
            }
            Err(LookupError::Unavailable(reason)) => {
                tracing::warn!("Weather lookup unavailable: {reason}");
                vec![Reply::text(messages::LOOKUP_UNAVAILABLE)]
            }
        }
    }

    /// Rule 6: advice from the stored triple, then re-ask for another city.
    /// Emits two replies, in that order.
    async fn recommend(&self, session: &mut Session) -> Vec<Reply> {
        let Some(weather) = session.last_weather.clone() else {
            return vec![Reply::text(messages::FALLBACK)];
        };

        let advice_reply = match self.advisor.clothing_advice(&weather).await {
            Ok(advice) => Reply::text(messages::clothing_advice(&advice)),
            Err(e) => {
                tracing::warn!("Advisor failed: {e}");
                Reply::text(messages::ADVICE_UNAVAILABLE)
            }
        };

        session.phase = Phase::AwaitingConfirmation;
        vec![advice_reply, Reply::text(messages::ANOTHER_CITY_PROMPT)]
    }
}
