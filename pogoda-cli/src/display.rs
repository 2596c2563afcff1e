use pogoda_core::Weather;

/// Render one reading as the bordered block printed after each request.
pub fn weather_block(weather: &Weather) -> String {
    format!(
        "\n╔════════════════════════════════╗\n\
         ║  Погода в {}\n\
         ╠════════════════════════════════╣\n\
         ║  Температура: {}°C\n\
         ║  Условия: {}\n\
         ║  Влажность: {}%\n\
         ║  Ветер: {} м/с\n\
         ╚════════════════════════════════╝\n",
        weather.city, weather.temperature, weather.condition, weather.humidity, weather.wind_speed,
    )
}

pub fn forecast_header(days: u32) -> String {
    format!("\n=== Прогноз на {days} дней ===")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_block_shows_all_fields() {
        let weather = Weather {
            city: "Казань".to_string(),
            temperature: -3,
            condition: "Снег".to_string(),
            humidity: 64,
            wind_speed: 7,
        };

        let block = weather_block(&weather);

        assert!(block.contains("Погода в Казань"));
        assert!(block.contains("Температура: -3°C"));
        assert!(block.contains("Условия: Снег"));
        assert!(block.contains("Влажность: 64%"));
        assert!(block.contains("Ветер: 7 м/с"));
    }

    #[test]
    fn forecast_header_names_day_count() {
        assert_eq!(forecast_header(5), "\n=== Прогноз на 5 дней ===");
    }
}
