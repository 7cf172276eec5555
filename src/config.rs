use std::time::Duration;

use log::Level;

pub const DEFAULT_API_BASE: &str = "https://www.themealdb.com/api/json/v1/1";
pub const DEFAULT_MEAL_CAP: usize = 50;
pub const DEFAULT_OVERLAY_RELEASE: Duration = Duration::from_millis(300);

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Service root without a trailing slash.
    pub api_base: String,
    pub meal_cap: usize,
    /// How long the overlay keeps catching clicks after the menu closes.
    pub overlay_release: Duration,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: option_env!("MEALDB_API_BASE")
                .map(normalize_base)
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            meal_cap: DEFAULT_MEAL_CAP,
            overlay_release: DEFAULT_OVERLAY_RELEASE,
            log_level: Level::Info,
        }
    }
}

impl Config {
    /// Defaults overridden by the page's own query string (`?api=...&log=debug`).
    ///
    /// Runs before the logger exists, so rejected values come back as
    /// messages for the caller to log.
    pub fn load() -> (Self, Vec<String>) {
        let search = leptos::prelude::window()
            .location()
            .search()
            .unwrap_or_default();
        Self::from_query(&search)
    }

    pub fn from_query(query: &str) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();
        let query = query.trim_start_matches('?');
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let Some((key, raw)) = pair.split_once('=') else {
                continue;
            };
            let value = match urlencoding::decode(raw) {
                Ok(value) => value.into_owned(),
                Err(e) => {
                    warnings.push(format!("Ignoring undecodable query value for {key}: {e}"));
                    continue;
                }
            };
            match key {
                "api" => {
                    let base = normalize_base(&value);
                    if base.is_empty() {
                        warnings.push(format!("Empty api override, keeping {}", config.api_base));
                    } else {
                        config.api_base = base;
                    }
                }
                "log" => match value.parse::<Level>() {
                    Ok(level) => config.log_level = level,
                    Err(_) => warnings.push(format!(
                        "Unknown log level {value:?}, keeping {}",
                        config.log_level
                    )),
                },
                _ => {}
            }
        }
        (config, warnings)
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}
