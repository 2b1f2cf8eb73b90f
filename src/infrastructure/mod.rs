//! # Infrastructure Layer
//!
//! Handles interactions with external systems and services.
//! Implements the traits defined in the Domain layer (WeatherProvider,
//! AdvisorProvider, ChatTransport).

pub mod advisor;
pub mod console;
pub mod weather;
