// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: user preferences read
//! from a `settings.toml` file. The file is edited by hand; the app never
//! writes it.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Thumbnail grid layout and upload hint
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Set `AYUSH_HUB_CONFIG_DIR` environment variable or pass `--config-dir`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use ayush_hub::app::config::{self, Config};
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings ignored: {key}");
//! }
//! println!("columns: {}", config.gallery.effective_columns());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned by [`load`] when the settings file cannot be parsed.
pub const LOAD_ERROR_WARNING: &str = "config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Gallery layout settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Thumbnails per grid row.
    #[serde(default = "default_columns")]
    pub columns: Option<u32>,

    /// Thumbnail edge length in logical pixels.
    #[serde(default = "default_thumbnail_size")]
    pub thumbnail_size: Option<f32>,

    /// Size shown in the upload hint, in megabytes.
    #[serde(default = "default_advisory_max_file_mb")]
    pub advisory_max_file_mb: Option<u32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            thumbnail_size: default_thumbnail_size(),
            advisory_max_file_mb: default_advisory_max_file_mb(),
        }
    }
}

impl GalleryConfig {
    /// Columns clamped to the supported range.
    #[must_use]
    pub fn effective_columns(&self) -> u32 {
        self.columns
            .unwrap_or(DEFAULT_GRID_COLUMNS)
            .clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS)
    }

    /// Thumbnail size clamped to the supported range. Non-finite values fall
    /// back to the default.
    #[must_use]
    pub fn effective_thumbnail_size(&self) -> f32 {
        match self.thumbnail_size {
            Some(size) if size.is_finite() => size.clamp(MIN_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE),
            _ => DEFAULT_THUMBNAIL_SIZE,
        }
    }

    #[must_use]
    pub fn effective_advisory_max_file_mb(&self) -> u32 {
        self.advisory_max_file_mb
            .unwrap_or(DEFAULT_ADVISORY_MAX_FILE_MB)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Gallery layout settings.
    #[serde(default)]
    pub gallery: GalleryConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_columns() -> Option<u32> {
    Some(DEFAULT_GRID_COLUMNS)
}

fn default_thumbnail_size() -> Option<f32> {
    Some(DEFAULT_THUMBNAIL_SIZE)
}

fn default_advisory_max_file_mb() -> Option<u32> {
    Some(DEFAULT_ADVISORY_MAX_FILE_MB)
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
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), %err, "falling back to default settings");
                    return (Config::default(), Some(LOAD_ERROR_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_theme_mode_is_a_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"sepia\"\n").expect("write");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("sepia")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.gallery.columns, Some(DEFAULT_GRID_COLUMNS));
        assert_eq!(config.gallery.thumbnail_size, Some(DEFAULT_THUMBNAIL_SIZE));
        assert_eq!(
            config.gallery.advisory_max_file_mb,
            Some(DEFAULT_ADVISORY_MAX_FILE_MB)
        );
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"fr\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load partial config");
        assert_eq!(loaded.general.language, Some("fr".to_string()));
        assert_eq!(loaded.gallery, GalleryConfig::default());
    }

    #[test]
    fn sectioned_format_loads_correctly() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        let content = r#"
[general]
language = "en-US"
theme_mode = "Dark"

[gallery]
columns = 6
thumbnail_size = 120.0
advisory_max_file_mb = 5
"#;
        fs::write(&config_path, content).expect("write sectioned config");

        let loaded = load_from_path(&config_path).expect("should load sectioned config");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.gallery.columns, Some(6));
        assert_eq!(loaded.gallery.thumbnail_size, Some(120.0));
        assert_eq!(loaded.gallery.advisory_max_file_mb, Some(5));
    }

    #[test]
    fn effective_values_are_clamped() {
        let gallery = GalleryConfig {
            columns: Some(40),
            thumbnail_size: Some(10.0),
            advisory_max_file_mb: None,
        };
        assert_eq!(gallery.effective_columns(), MAX_GRID_COLUMNS);
        assert_eq!(gallery.effective_thumbnail_size(), MIN_THUMBNAIL_SIZE);
        assert_eq!(
            gallery.effective_advisory_max_file_mb(),
            DEFAULT_ADVISORY_MAX_FILE_MB
        );

        let zero = GalleryConfig {
            columns: Some(0),
            thumbnail_size: Some(f32::NAN),
            ..GalleryConfig::default()
        };
        assert_eq!(zero.effective_columns(), MIN_GRID_COLUMNS);
        assert_eq!(zero.effective_thumbnail_size(), DEFAULT_THUMBNAIL_SIZE);
    }

    #[test]
    fn load_with_override_reads_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(
            base_dir.join("settings.toml"),
            "[general]\nlanguage = \"fr\"\ntheme_mode = \"dark\"\n",
        )
        .expect("write config");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(
            loaded,
            Config {
                general: GeneralConfig {
                    language: Some("fr".to_string()),
                    theme_mode: ThemeMode::Dark,
                },
                ..Config::default()
            }
        );
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_WARNING));
        assert_eq!(config, Config::default());
    }
}
