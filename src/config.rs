//! Application configuration.

use crate::consts::dashboard_consts::{DEFAULT_DAYS_AHEAD, DEFAULT_SENTIMENT_EPSILON};
use crate::environment::Environment;
use crate::panels::calendar::Impact;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{fs, path::Path, path::PathBuf};

/// Persisted user preferences. Every field is optional; missing fields fall
/// back to the environment or to built-in defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api_url: Option<String>,
    pub refresh_interval_secs: Option<u64>,
    pub calendar_days_ahead: Option<u32>,
    pub calendar_impact_filter: Option<Impact>,
    pub sentiment_epsilon: Option<f64>,
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the configuration file if it exists, or returns the empty configuration.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Removes the configuration file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// Path of the configuration file: `~/.macro-dashboard/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home_path = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Failed to get home directory",
        )
    })?;
    Ok(home_path.join(".macro-dashboard").join("config.json"))
}

/// Command-line overrides, applied on top of the configuration file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub refresh_interval_secs: Option<u64>,
    pub calendar_days_ahead: Option<u32>,
    pub calendar_impact_filter: Option<Impact>,
    pub sentiment_epsilon: Option<f64>,
}

/// Fully resolved settings of one dashboard session.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub environment: Environment,
    pub refresh_interval: Duration,
    pub calendar_days_ahead: u32,
    pub calendar_impact_filter: Option<Impact>,
    pub sentiment_epsilon: f64,
}

impl Settings {
    /// Resolves settings with precedence: overrides > config file > environment > defaults.
    pub fn resolve(
        config: &Config,
        overrides: &Overrides,
        environment: Environment,
        default_interval: Duration,
    ) -> Result<Self, String> {
        let environment = match overrides.api_url.as_ref().or(config.api_url.as_ref()) {
            Some(url) => url
                .parse::<Environment>()
                .map_err(|_| format!("Invalid API URL: {}", url))?,
            None => environment,
        };

        let refresh_interval = overrides
            .refresh_interval_secs
            .or(config.refresh_interval_secs)
            .map(Duration::from_secs)
            .unwrap_or(default_interval);
        if refresh_interval.is_zero() {
            return Err("Refresh interval must be at least one second".to_string());
        }

        let sentiment_epsilon = overrides
            .sentiment_epsilon
            .or(config.sentiment_epsilon)
            .unwrap_or(DEFAULT_SENTIMENT_EPSILON);
        if !sentiment_epsilon.is_finite() || sentiment_epsilon < 0.0 {
            return Err(format!(
                "Sentiment epsilon must be a non-negative number, got {}",
                sentiment_epsilon
            ));
        }

        Ok(Self {
            environment,
            refresh_interval,
            calendar_days_ahead: overrides
                .calendar_days_ahead
                .or(config.calendar_days_ahead)
                .unwrap_or(DEFAULT_DAYS_AHEAD),
            calendar_impact_filter: overrides
                .calendar_impact_filter
                .or(config.calendar_impact_filter),
            sentiment_epsilon,
        })
    }
}
