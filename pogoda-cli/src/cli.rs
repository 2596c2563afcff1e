use clap::Parser;
use inquire::{InquireError, Select, Text};
use pogoda_core::{RequestHistory, WeatherService};

use crate::display;

/// Day count used when the forecast prompt cannot be parsed as a number.
const DEFAULT_FORECAST_DAYS: u32 = 3;

/// Top-level CLI struct.
///
/// The tool is fully interactive, so there are no functional flags; clap
/// only provides `--help` and `--version`.
#[derive(Debug, Parser)]
#[command(
    name = "pogoda",
    version,
    about = "Симулятор погоды для фиксированного набора городов"
)]
pub struct Cli {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    CurrentWeather,
    Forecast,
    AvailableCities,
    History,
    Exit,
}

impl MenuChoice {
    const ALL: [MenuChoice; 5] = [
        MenuChoice::CurrentWeather,
        MenuChoice::Forecast,
        MenuChoice::AvailableCities,
        MenuChoice::History,
        MenuChoice::Exit,
    ];
}

impl std::fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MenuChoice::CurrentWeather => "Узнать погоду",
            MenuChoice::Forecast => "Прогноз на несколько дней",
            MenuChoice::AvailableCities => "Показать доступные города",
            MenuChoice::History => "История запросов",
            MenuChoice::Exit => "Выход",
        };
        f.write_str(label)
    }
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let service = WeatherService::new();
        let mut history = RequestHistory::new();

        println!("=== Симулятор погоды ===\n");

        loop {
            let Some(choice) =
                or_cancelled(Select::new("Выберите действие:", MenuChoice::ALL.to_vec()).prompt())?
            else {
                break;
            };

            match choice {
                MenuChoice::CurrentWeather => {
                    let Some(city) = prompt_city()? else { continue };

                    match service.get_weather(&city) {
                        Ok(weather) => {
                            println!("{}", display::weather_block(&weather));
                            history.record(format!("Погода в {}", weather.city));
                        }
                        Err(err) => println!("✗ {err}\n"),
                    }
                }
                MenuChoice::Forecast => {
                    let Some(city) = prompt_city()? else { continue };
                    let Some(days_input) =
                        or_cancelled(Text::new("На сколько дней (1-7):").prompt())?
                    else {
                        continue;
                    };
                    let days = parse_days(&days_input);

                    let forecast = service.get_forecast(&city, days);
                    if forecast.is_empty() {
                        println!("✗ Город не найден\n");
                    } else {
                        println!("{}", display::forecast_header(days));
                        for reading in &forecast {
                            println!("{}", display::weather_block(reading));
                        }
                        history.record(format!("Прогноз для {city} на {days} дней"));
                    }
                }
                MenuChoice::AvailableCities => {
                    println!("\nДоступные города:");
                    for name in service.available_cities() {
                        println!("  • {name}");
                    }
                    println!();
                }
                MenuChoice::History => {
                    if history.is_empty() {
                        println!("\nИстория пуста\n");
                    } else {
                        println!("\n=== История запросов ===");
                        for (index, entry) in history.entries().iter().enumerate() {
                            println!("{}. {entry}", index + 1);
                        }
                        println!();
                    }
                }
                MenuChoice::Exit => {
                    println!("До свидания!");
                    break;
                }
            }
        }

        Ok(())
    }
}

fn prompt_city() -> anyhow::Result<Option<String>> {
    or_cancelled(Text::new("Введите название города:").prompt())
}

/// Esc/Ctrl-C on a prompt ends the current action instead of failing the
/// whole program; every other prompt error propagates.
fn or_cancelled<T>(result: Result<T, InquireError>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Parseable day counts are clamped into 1..=7, anything else falls back to
/// the default. Never fatal.
fn parse_days(input: &str) -> u32 {
    input
        .trim()
        .parse::<i64>()
        .map_or(DEFAULT_FORECAST_DAYS, |days| days.clamp(1, 7) as u32)
}
