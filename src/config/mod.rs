// SPDX-License-Identifier: MPL-2.0
//! Toaster configuration, including loading and saving options to a
//! `toaster.toml` file.
//!
//! # Configuration Layout
//!
//! Top-level keys cover lifecycle and chrome options; icon overrides live in
//! their own table:
//! - `show_duration_ms`, `limit`, `show_close_button` - top level
//! - `[icons]` - per-severity icon source overrides plus the close icon
//!
//! Every option is optional: missing keys fall back to the defaults in
//! [`defaults`], so an empty file and no file at all are both valid.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_TOASTER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toaster::config::{self, ToasterConfig};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.show_close_button = true;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::toaster::Severity;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "toaster.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "IcedToaster";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_TOASTER_CONFIG_DIR";

// =============================================================================
// Icon Overrides
// =============================================================================

/// Per-severity icon source overrides (the `[icons]` table).
///
/// Each field names an image file on disk. An empty string means "use the
/// built-in vector artwork", so a default-constructed value overrides nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct IconOverrides {
    /// Icon source for error toasts.
    #[serde(default)]
    pub error: String,

    /// Icon source for warning toasts.
    #[serde(default)]
    pub warning: String,

    /// Icon source for success toasts.
    #[serde(default)]
    pub success: String,

    /// Icon source for information toasts.
    #[serde(default)]
    pub information: String,

    /// Icon source for the close button.
    #[serde(default)]
    pub close: String,
}

impl IconOverrides {
    /// Returns the override source for a severity, or `None` when the
    /// built-in icon should be used.
    pub fn for_severity(&self, severity: Severity) -> Option<&str> {
        let source = match severity {
            Severity::Error => &self.error,
            Severity::Warning => &self.warning,
            Severity::Success => &self.success,
            Severity::Information => &self.information,
        };
        non_empty(source)
    }

    /// Returns the override source for the close button, if any.
    pub fn for_close(&self) -> Option<&str> {
        non_empty(&self.close)
    }
}

fn non_empty(source: &str) -> Option<&str> {
    if source.is_empty() {
        None
    } else {
        Some(source)
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Construction-time toaster options.
///
/// The configuration is immutable once handed to the toaster; reloading it
/// requires constructing a new toaster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToasterConfig {
    /// How long a toast stays visible before auto-dismissal (milliseconds).
    #[serde(default = "default_show_duration_ms")]
    pub show_duration_ms: u64,

    /// Maximum number of concurrently shown toasts. Values ≤ 0 fall back
    /// to the default; see [`ToasterConfig::effective_limit`].
    #[serde(default = "default_limit")]
    pub limit: i32,

    /// Whether toasts carry a close button for manual dismissal.
    #[serde(default)]
    pub show_close_button: bool,

    /// Icon source overrides.
    #[serde(default)]
    pub icons: IconOverrides,
}

impl Default for ToasterConfig {
    fn default() -> Self {
        Self {
            show_duration_ms: default_show_duration_ms(),
            limit: default_limit(),
            show_close_button: false,
            icons: IconOverrides::default(),
        }
    }
}

impl ToasterConfig {
    /// The show duration as a [`Duration`].
    pub fn show_duration(&self) -> Duration {
        Duration::from_millis(self.show_duration_ms)
    }

    /// The shown-toast limit with non-positive values normalized to the
    /// default. The result is always at least 1.
    pub fn effective_limit(&self) -> usize {
        if self.limit <= 0 {
            DEFAULT_LIMIT as usize
        } else {
            self.limit as usize
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_show_duration_ms() -> u64 {
    DEFAULT_SHOW_DURATION_MS
}

fn default_limit() -> i32 {
    DEFAULT_LIMIT
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory path with an optional override.
///
/// # Resolution Order
///
/// 1. `override_path` parameter (if `Some`) - most specific, for tests
/// 2. `ICED_TOASTER_CONFIG_DIR` environment variable (if set and non-empty)
/// 3. Platform-specific config directory (with app name appended)
pub fn get_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: Environment variable
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 3: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
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
/// default config with a warning message explaining what went wrong.
pub fn load() -> (ToasterConfig, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (ToasterConfig, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        ToasterConfig::default(),
                        Some("failed to parse toaster configuration; using defaults".to_string()),
                    );
                }
            }
        }
    }
    (ToasterConfig::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<ToasterConfig> {
    let content = fs::read_to_string(path)?;
    let config: ToasterConfig = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &ToasterConfig) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &ToasterConfig, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &ToasterConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::Mutex;
    use tempfile::tempdir;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn default_config_has_expected_values() {
        let config = ToasterConfig::default();
        assert_eq!(config.show_duration_ms, DEFAULT_SHOW_DURATION_MS);
        assert_eq!(config.limit, DEFAULT_LIMIT);
        assert!(!config.show_close_button);
        assert_eq!(config.icons, IconOverrides::default());
    }

    #[test]
    fn show_duration_converts_milliseconds() {
        let config = ToasterConfig {
            show_duration_ms: 1500,
            ..ToasterConfig::default()
        };
        assert_eq!(config.show_duration(), Duration::from_millis(1500));
    }

    #[test]
    fn effective_limit_passes_positive_values_through() {
        let config = ToasterConfig {
            limit: 2,
            ..ToasterConfig::default()
        };
        assert_eq!(config.effective_limit(), 2);
    }

    #[test]
    fn effective_limit_normalizes_zero_to_default() {
        let config = ToasterConfig {
            limit: 0,
            ..ToasterConfig::default()
        };
        assert_eq!(config.effective_limit(), DEFAULT_LIMIT as usize);
    }

    #[test]
    fn effective_limit_normalizes_negative_to_default() {
        let config = ToasterConfig {
            limit: -3,
            ..ToasterConfig::default()
        };
        assert_eq!(config.effective_limit(), DEFAULT_LIMIT as usize);
    }

    #[test]
    fn empty_icon_override_means_builtin() {
        let icons = IconOverrides::default();
        assert_eq!(icons.for_severity(Severity::Error), None);
        assert_eq!(icons.for_severity(Severity::Warning), None);
        assert_eq!(icons.for_severity(Severity::Success), None);
        assert_eq!(icons.for_severity(Severity::Information), None);
        assert_eq!(icons.for_close(), None);
    }

    #[test]
    fn icon_override_returns_configured_source() {
        let icons = IconOverrides {
            warning: "assets/warn.png".to_string(),
            close: "assets/x.png".to_string(),
            ..IconOverrides::default()
        };
        assert_eq!(icons.for_severity(Severity::Warning), Some("assets/warn.png"));
        assert_eq!(icons.for_severity(Severity::Error), None);
        assert_eq!(icons.for_close(), Some("assets/x.png"));
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = ToasterConfig {
            show_duration_ms: 2500,
            limit: 3,
            show_close_button: true,
            icons: IconOverrides {
                error: "icons/error.png".to_string(),
                ..IconOverrides::default()
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("toaster.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toaster.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("expected")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn partial_file_fills_missing_keys_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toaster.toml");
        fs::write(&config_path, "limit = 2\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.limit, 2);
        assert_eq!(loaded.show_duration_ms, DEFAULT_SHOW_DURATION_MS);
        assert!(!loaded.show_close_button);
        assert_eq!(loaded.icons, IconOverrides::default());
    }

    #[test]
    fn icons_table_loads_from_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toaster.toml");
        let content = r#"
show_close_button = true

[icons]
success = "assets/check.png"
close = "assets/close.png"
"#;
        fs::write(&config_path, content).expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert!(loaded.show_close_button);
        assert_eq!(
            loaded.icons.for_severity(Severity::Success),
            Some("assets/check.png")
        );
        assert_eq!(loaded.icons.for_close(), Some("assets/close.png"));
        assert_eq!(loaded.icons.for_severity(Severity::Error), None);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("toaster.toml");

        save_to_path(&ToasterConfig::default(), &config_path)
            .expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = ToasterConfig {
            show_duration_ms: 6000,
            limit: 1,
            show_close_button: true,
            icons: IconOverrides::default(),
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");

        let expected_path = base_dir.join("toaster.toml");
        assert!(expected_path.exists(), "config file should exist");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let (config, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, ToasterConfig::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config_path = base_dir.join("toaster.toml");
        fs::write(&config_path, "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_some(), "should warn about parse error");
        assert_eq!(config, ToasterConfig::default());
    }

    #[test]
    fn override_path_takes_precedence_over_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/env/path");

        let override_path = PathBuf::from("/override/path");
        let result = get_config_dir_with_override(Some(override_path.clone()));

        assert_eq!(result, Some(override_path));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_config_dir_with_override(None);
        assert_eq!(result, Some(PathBuf::from(test_path)));

        // Cleanup
        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        let result = get_config_dir_with_override(None);
        // Should fall back to platform default which contains app name
        if let Some(path) = result {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn saved_config_contains_icons_table() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toaster.toml");

        save_to_path(&ToasterConfig::default(), &config_path).expect("save config");

        let content = fs::read_to_string(&config_path).expect("read config");
        assert!(content.contains("[icons]"), "should have [icons] section");
        assert!(content.contains("show_duration_ms"));
    }
}
