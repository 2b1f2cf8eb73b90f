//! # Messages
//!
//! Contains constant strings and format functions for user-facing messages.
//! All product text is Spanish, matching the ClimaBot Ecuador persona.

pub const WELCOME: &str = "👋 ¡Hola! Soy *ClimaBot Ecuador*, tu asistente del clima \
en tiempo real. Estoy aquí para ayudarte a consultar el estado del tiempo en \
cualquier ciudad del país. 🌍✨ ¿Cuál ciudad deseas revisar hoy?";

pub const START_PROMPT: &str = "👋 ¡Hola! Bienvenido a *ClimaBot Ecuador*.\n\nElige una ciudad o escribe una:";

pub const GRATITUDE_REPLY: &str = "😊 ¡Con gusto! ¿Quieres consultar otra ciudad? (sí/no)";

pub const TOPIC_CLOSED: &str =
    "😊 ¡Perfecto! Si necesitas consultar otro clima, solo escribe una ciudad 🌍.";

pub const ASK_ANOTHER_CITY: &str = "Perfecto 😊 ¿Quieres consultar otra ciudad? (sí/no)";

pub const NEXT_CITY_PROMPT: &str = "Perfecto 😊, dime la nueva ciudad que deseas consultar 🌍";

pub const ANOTHER_CITY_PROMPT: &str = "¿Quieres consultar otra ciudad? (sí/no)";

pub const NUMERIC_INPUT_WARNING: &str = "⚠️ Escribe solo letras.";

pub const CITY_NOT_FOUND: &str =
    "⚠️ *No encontré esa ciudad.* Intenta con: Loja, Quito, Guayaquil, Cuenca…";

pub const LOOKUP_UNAVAILABLE: &str =
    "⚠️ No pude consultar el clima en este momento. Inténtalo de nuevo en unos minutos.";

pub const ADVICE_UNAVAILABLE: &str =
    "⚠️ No pude generar la recomendación de vestimenta en este momento.";

pub const FALLBACK: &str = "🤔 No entendí eso. ¿Quieres consultar otra ciudad? (sí/no)";

pub fn weather_summary(city: &str, temp: f64, condition: &str, humidity: u8) -> String {
    format!(
        "🌍 *Clima en {}*\n\n🌡 Temperatura: *{temp}°C*\n📌 Estado: *{condition}*\n💧 Humedad: *{humidity}%*",
        title_case(city)
    )
}

pub fn weather_with_advice_prompt(summary: &str) -> String {
    format!("{summary}\n\n👕 ¿Quieres recomendación de vestimenta? (sí/no)")
}

pub fn clothing_advice(advice: &str) -> String {
    format!("👚 *Recomendación de vestimenta:*\n\n{advice}")
}

/// Uppercase the first letter of every whitespace-separated word
/// ("santa elena" -> "Santa Elena").
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first letter of a single word.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
