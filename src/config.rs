//! Configuration for the quiz runner
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/viktorina/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Deck file to load; `None` means the bundled sample deck
    pub deck: Option<PathBuf>,

    /// Theme name: "dark", "light", "nord", "gruvbox"
    pub theme: String,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            deck: None,
            theme: "dark".to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default level for the crate ("error", "warn", "info", "debug", "trace");
    /// RUST_LOG overrides this entirely
    pub level: String,

    /// Whether to also write logs to rotating files
    pub file_enabled: bool,

    /// Directory for log files
    pub file_dir: PathBuf,

    /// Log file name prefix
    pub file_prefix: String,

    /// Rotation schedule for log files
    pub file_rotation: LogRotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_prefix: "viktorina".to_string(),
            file_rotation: LogRotation::Daily,
        }
    }
}

/// Log file rotation schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Hourly,
    Daily,
    Never,
}

// ─────────────────────────────────────────────────────────────────────────────
// File configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure - every field optional so a partial file works
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    deck: Option<String>,
    theme: Option<String>,

    /// Optional [logging] section
    logging: Option<FileLogging>,
}

#[derive(Debug, Deserialize, Default)]
struct FileLogging {
    level: Option<String>,
    file_enabled: Option<bool>,
    file_dir: Option<String>,
    file_prefix: Option<String>,
    file_rotation: Option<LogRotation>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Path to the config file, if a platform config directory exists
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("viktorina").join("config.toml"))
    }

    /// Load configuration: defaults, overlaid by the config file,
    /// overlaid by environment variables
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Some(file) = Self::read_file() {
            config.apply_file(file);
        }
        config.apply_env();
        config
    }

    fn read_file() -> Option<FileConfig> {
        let path = Self::config_path()?;
        let raw = std::fs::read_to_string(&path).ok()?;
        match toml::from_str(&raw) {
            Ok(file) => Some(file),
            Err(e) => {
                // Don't abort over a bad config file - run with defaults
                eprintln!("Warning: ignoring malformed config {}: {}", path.display(), e);
                None
            }
        }
    }

    fn apply_file(&mut self, file: FileConfig) {
        if let Some(deck) = file.deck {
            self.deck = Some(PathBuf::from(deck));
        }
        if let Some(theme) = file.theme {
            self.theme = theme;
        }
        if let Some(logging) = file.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(enabled) = logging.file_enabled {
                self.logging.file_enabled = enabled;
            }
            if let Some(dir) = logging.file_dir {
                self.logging.file_dir = PathBuf::from(dir);
            }
            if let Some(prefix) = logging.file_prefix {
                self.logging.file_prefix = prefix;
            }
            if let Some(rotation) = logging.file_rotation {
                self.logging.file_rotation = rotation;
            }
        }
    }

    fn apply_env(&mut self) {
        if let Ok(deck) = std::env::var("VIKTORINA_DECK") {
            if !deck.is_empty() {
                self.deck = Some(PathBuf::from(deck));
            }
        }
        if let Ok(theme) = std::env::var("VIKTORINA_THEME") {
            if !theme.is_empty() {
                self.theme = theme;
            }
        }
    }

    /// Write a commented template config on first run so users can
    /// discover the available options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };
        if path.exists() {
            return;
        }
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        let _ = std::fs::write(&path, Self::template());
    }

    /// Default config file contents
    pub fn template() -> &'static str {
        r#"# viktorina configuration
# Values here override the built-in defaults.
# Environment variables (VIKTORINA_DECK, VIKTORINA_THEME) override this file.

# Path to a JSON deck file. Comment out to use the bundled sample deck.
# deck = "/path/to/deck.json"

# Theme: "dark", "light", "nord", "gruvbox"
theme = "dark"

[logging]
# Level for viktorina logs: "error", "warn", "info", "debug", "trace"
# RUST_LOG takes precedence when set.
level = "info"

# Also write logs to rotating files
file_enabled = false
file_dir = "./logs"
file_prefix = "viktorina"
# Rotation: "hourly", "daily", "never"
file_rotation = "daily"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_bundled_deck_and_dark_theme() {
        let config = Config::default();
        assert!(config.deck.is_none());
        assert_eq!(config.theme, "dark");
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.file_enabled);
    }

    #[test]
    fn file_values_override_defaults() {
        let file: FileConfig = toml::from_str(
            r#"
            deck = "my.json"
            theme = "nord"

            [logging]
            level = "debug"
            file_enabled = true
            file_rotation = "hourly"
            "#,
        )
        .unwrap();

        let mut config = Config::default();
        config.apply_file(file);

        assert_eq!(config.deck, Some(PathBuf::from("my.json")));
        assert_eq!(config.theme, "nord");
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.file_enabled);
        assert_eq!(config.logging.file_rotation, LogRotation::Hourly);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let file: FileConfig = toml::from_str(r#"theme = "light""#).unwrap();
        let mut config = Config::default();
        config.apply_file(file);

        assert_eq!(config.theme, "light");
        assert!(config.deck.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn template_parses_as_valid_file_config() {
        let file: Result<FileConfig, _> = toml::from_str(Config::template());
        assert!(file.is_ok());
    }

    #[test]
    fn unknown_rotation_is_rejected() {
        let file: Result<FileLogging, _> = toml::from_str(r#"file_rotation = "weekly""#);
        assert!(file.is_err());
    }
}
