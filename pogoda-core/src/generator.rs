use std::ops::Range;

use rand::Rng;

use crate::model::Weather;

/// Fixed set of condition labels a reading can carry.
pub const CONDITIONS: [&str; 5] = ["Солнечно", "Облачно", "Дождь", "Снег", "Туман"];

/// Degrees Celsius, half-open.
pub const TEMPERATURE_RANGE: Range<i32> = -20..35;
/// Percent, half-open.
pub const HUMIDITY_RANGE: Range<u8> = 30..90;
/// Meters per second, half-open.
pub const WIND_SPEED_RANGE: Range<u8> = 0..25;

/// Produces simulated readings by sampling each field independently and
/// uniformly from the fixed ranges above.
///
/// Uses the thread-local RNG on every call; there is no seeding and no
/// reproducibility contract, successive readings are independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadingGenerator;

impl ReadingGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate one reading tagged with the given display label.
    pub fn generate(&self, label: impl Into<String>) -> Weather {
        let mut rng = rand::rng();

        Weather {
            city: label.into(),
            temperature: rng.random_range(TEMPERATURE_RANGE),
            condition: CONDITIONS[rng.random_range(0..CONDITIONS.len())].to_string(),
            humidity: rng.random_range(HUMIDITY_RANGE),
            wind_speed: rng.random_range(WIND_SPEED_RANGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readings_stay_within_ranges() {
        let generator = ReadingGenerator::new();

        for _ in 0..500 {
            let reading = generator.generate("Казань");

            assert!(TEMPERATURE_RANGE.contains(&reading.temperature));
            assert!(HUMIDITY_RANGE.contains(&reading.humidity));
            assert!(WIND_SPEED_RANGE.contains(&reading.wind_speed));
            assert!(CONDITIONS.contains(&reading.condition.as_str()));
        }
    }

    #[test]
    fn label_is_passed_through_verbatim() {
        let generator = ReadingGenerator::new();

        let reading = generator.generate("Москва (День 3)");
        assert_eq!(reading.city, "Москва (День 3)");
    }
}
