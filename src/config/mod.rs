// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! Invalid values never abort startup: unknown or out-of-range settings fall
//! back to the defaults in [`defaults`] with a warning on stderr.

pub mod defaults;

pub use defaults::{
    CANVAS_MAX_DIMENSION, DEFAULT_MAX_ZOOM_FACTOR, DEFAULT_SLIDESHOW_INTERVAL_SECS,
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MAX_SLIDESHOW_INTERVAL_SECS, MIN_WINDOW_HEIGHT,
    MIN_WINDOW_WIDTH, MIN_ZOOM_FACTOR,
};

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Lightbox";

/// Order in which scanned image files are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sort_order: Option<SortOrder>,
    #[serde(default)]
    pub max_zoom_factor: Option<i32>,
    #[serde(default)]
    pub slideshow_interval_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sort_order: Some(SortOrder::Alphabetical),
            max_zoom_factor: Some(DEFAULT_MAX_ZOOM_FACTOR),
            slideshow_interval_secs: Some(DEFAULT_SLIDESHOW_INTERVAL_SECS),
        }
    }
}

impl Config {
    /// Returns the configured sort order, defaulting to alphabetical.
    #[must_use]
    pub fn effective_sort_order(&self) -> SortOrder {
        self.sort_order.unwrap_or_default()
    }

    /// Returns the configured zoom ceiling if it is a power of two within the
    /// supported range, otherwise the default ceiling.
    #[must_use]
    pub fn effective_max_zoom_factor(&self) -> i32 {
        match self.max_zoom_factor {
            None => DEFAULT_MAX_ZOOM_FACTOR,
            Some(factor)
                if factor >= MIN_ZOOM_FACTOR
                    && factor <= CANVAS_MAX_DIMENSION
                    && factor.count_ones() == 1 =>
            {
                factor
            }
            Some(factor) => {
                eprintln!(
                    "Ignoring max_zoom_factor = {factor}: must be a power of two within [{MIN_ZOOM_FACTOR}, {CANVAS_MAX_DIMENSION}]"
                );
                DEFAULT_MAX_ZOOM_FACTOR
            }
        }
    }

    /// Returns the slideshow interval, clamped to the supported range.
    #[must_use]
    pub fn effective_slideshow_interval(&self) -> Duration {
        let secs = self
            .slideshow_interval_secs
            .unwrap_or(DEFAULT_SLIDESHOW_INTERVAL_SECS)
            .clamp(
                defaults::MIN_SLIDESHOW_INTERVAL_SECS,
                MAX_SLIDESHOW_INTERVAL_SECS,
            );
        Duration::from_secs(secs)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            sort_order: Some(SortOrder::ModifiedDate),
            max_zoom_factor: Some(16),
            slideshow_interval_secs: Some(10),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.sort_order, config.sort_order);
        assert_eq!(loaded.max_zoom_factor, config.max_zoom_factor);
        assert_eq!(loaded.slideshow_interval_secs, config.slideshow_interval_secs);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.max_zoom_factor, Some(DEFAULT_MAX_ZOOM_FACTOR));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn effective_max_zoom_accepts_power_of_two() {
        let config = Config {
            max_zoom_factor: Some(16),
            ..Config::default()
        };
        assert_eq!(config.effective_max_zoom_factor(), 16);
    }

    #[test]
    fn effective_max_zoom_rejects_non_power_of_two() {
        let config = Config {
            max_zoom_factor: Some(100),
            ..Config::default()
        };
        assert_eq!(config.effective_max_zoom_factor(), DEFAULT_MAX_ZOOM_FACTOR);
    }

    #[test]
    fn effective_max_zoom_rejects_out_of_range_values() {
        let too_small = Config {
            max_zoom_factor: Some(0),
            ..Config::default()
        };
        let too_large = Config {
            max_zoom_factor: Some(65_536),
            ..Config::default()
        };
        assert_eq!(too_small.effective_max_zoom_factor(), DEFAULT_MAX_ZOOM_FACTOR);
        assert_eq!(too_large.effective_max_zoom_factor(), DEFAULT_MAX_ZOOM_FACTOR);
    }

    #[test]
    fn effective_slideshow_interval_clamps() {
        let config = Config {
            slideshow_interval_secs: Some(0),
            ..Config::default()
        };
        assert_eq!(
            config.effective_slideshow_interval(),
            Duration::from_secs(defaults::MIN_SLIDESHOW_INTERVAL_SECS)
        );
    }

    #[test]
    fn default_config_is_fully_populated() {
        let config = Config::default();
        assert_eq!(config.effective_sort_order(), SortOrder::Alphabetical);
        assert_eq!(config.effective_max_zoom_factor(), DEFAULT_MAX_ZOOM_FACTOR);
        assert_eq!(
            config.effective_slideshow_interval(),
            Duration::from_secs(DEFAULT_SLIDESHOW_INTERVAL_SECS)
        );
    }
}
