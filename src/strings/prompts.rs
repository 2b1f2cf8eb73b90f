//! # Prompts
//!
//! Templates for prompts sent to the generative advisor.

use crate::domain::types::WeatherSnapshot;

pub fn clothing_advice(weather: &WeatherSnapshot) -> String {
    format!(
        "Eres un asistente profesional de viajes.\n\
         Basado en este clima:\n\n\
         Temperatura: {} °C\n\
         Estado: {}\n\
         Humedad: {}%\n\n\
         Recomienda vestimenta ideal para viajar hoy.\n\
         Máximo 5 líneas, usa emojis.",
        weather.temperature, weather.condition, weather.humidity
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clothing_advice_includes_weather_triple() {
        let prompt = clothing_advice(&WeatherSnapshot {
            temperature: 18.0,
            condition: "Cielo despejado".to_string(),
            humidity: 40,
        });
        assert!(prompt.contains("Temperatura: 18 °C"));
        assert!(prompt.contains("Estado: Cielo despejado"));
        assert!(prompt.contains("Humedad: 40%"));
    }
}
