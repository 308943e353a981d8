// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from an
//! optional `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[greeting]` - Recipient name, age and date shown on the card
//!
//! The game itself (candle and balloon totals, autoplay cadence, confetti
//! particle count) is not configurable; see [`defaults`].
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` CLI argument
//! 3. `BIRTHDAY_WISH_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use birthday_wish::config;
//!
//! let (config, warning) = config::load();
//! if warning.is_none() {
//!     println!("{}", config.greeting.recipient_or_default());
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key reported when `settings.toml` exists but cannot be read.
pub const CONFIG_LOAD_WARNING: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Text printed on the greeting card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GreetingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    /// Day of month, 1-31.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,

    /// Month, 1-12.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
}

impl GreetingConfig {
    /// Returns the configured recipient, ignoring blank values.
    #[must_use]
    pub fn recipient_or_default(&self) -> &str {
        self.recipient
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_RECIPIENT)
    }

    #[must_use]
    pub fn age_or_default(&self) -> u32 {
        self.age.unwrap_or(DEFAULT_AGE)
    }

    /// Returns `(day, month)`, falling back to the defaults unless the pair
    /// names a real calendar day. February 29 is accepted since no year is given.
    #[must_use]
    pub fn date_or_default(&self) -> (u32, u32) {
        match (self.day, self.month) {
            (Some(day), Some(month)) if (1..=days_in_month(month)).contains(&day) => (day, month),
            _ => (DEFAULT_DAY, DEFAULT_MONTH),
        }
    }
}

/// Longest possible length of `month`, or 0 when it is not a month.
fn days_in_month(month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 29,
        _ => 0,
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub greeting: GreetingConfig,
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). A missing file is not an
/// error; an unreadable one yields the default config and a warning key.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content).map_err(Error::from)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
