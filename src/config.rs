use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Almanac configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AlmanacConfig {
    /// Calendar system settings.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Month view settings.
    #[serde(default)]
    pub view: ViewToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    #[serde(default = "default_first_weekday")]
    pub first_weekday: String,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            first_weekday: default_first_weekday(),
        }
    }
}

fn default_first_weekday() -> String {
    "sunday".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewToml {
    #[serde(default = "default_true")]
    pub show_header: bool,
    /// `YYYY-MM`; the current month when unset.
    #[serde(default)]
    pub initial_month: Option<String>,
    #[serde(default = "default_gesture_threshold")]
    pub gesture_threshold: f64,
    /// Number of months shown by the `calendar` command.
    #[serde(default = "default_months")]
    pub months: u32,
}

impl Default for ViewToml {
    fn default() -> Self {
        Self {
            show_header: true,
            initial_month: None,
            gesture_threshold: default_gesture_threshold(),
            months: default_months(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_gesture_threshold() -> f64 {
    100.0
}
fn default_months() -> u32 {
    12
}

/// Reads the TOML file at `path`, or returns defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<AlmanacConfig> {
    let Some(path) = path else {
        return Ok(AlmanacConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
