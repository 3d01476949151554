//! Configuration file parser for ~/.config/topics/config.toml.
//!
//! The config file is optional: a missing file yields `Config::default()`.
//! Unknown keys are accepted but logged as warnings.
//! Command-line flags take precedence over the file, see [`Config::app_options`].
use crate::app::AppOptions;
use crate::theme::ThemeVariant;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config file exceeds maximum allowed size.
    #[error("Config file too large: {0}")]
    TooLarge(String),

    #[error("Invalid value '{value}' for '{key}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub theme: Option<String>,
    pub no_animation: bool,
    pub catalog_path: Option<PathBuf>,
}

// ============================================================================
// Configuration Struct
// ============================================================================

/// Top-level application configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial theme variant: "light" or "dark".
    pub theme: String,

    /// Whether cards fade in and the border cycles colours.
    pub animations: bool,

    /// Delay between consecutive cards in the fade-in, in milliseconds.
    pub stagger_ms: u64,

    /// Optional TOML catalog replacing the built-in topics.
    pub catalog_path: Option<PathBuf>,

    /// Custom keybinding overrides. Keys are action names, values are key strings.
    pub keybindings: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            animations: true,
            stagger_ms: 70,
            catalog_path: None,
            keybindings: HashMap::new(),
        }
    }
}

impl Config {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    const KNOWN_KEYS: [&'static str; 5] = [
        "theme",
        "animations",
        "stagger_ms",
        "catalog_path",
        "keybindings",
    ];

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)`
    /// - Unknown keys → accepted, logged as warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        for key in Self::unknown_keys(content) {
            tracing::warn!(key = %key, "Unknown key in config file, ignoring");
        }

        let config: Config = toml::from_str(content)?;
        tracing::info!(theme = %config.theme, animations = config.animations, "Loaded configuration");
        Ok(config)
    }

    /// Resolve startup options: CLI first, then this config, then defaults.
    pub fn app_options(&self, cli: &CliOverrides) -> Result<AppOptions, ConfigError> {
        let theme_name = cli.theme.as_deref().unwrap_or(&self.theme);
        let theme =
            ThemeVariant::from_str_name(theme_name).ok_or_else(|| ConfigError::InvalidValue {
                key: "theme",
                value: theme_name.to_string(),
            })?;

        Ok(AppOptions {
            theme,
            animations: self.animations && !cli.no_animation,
            stagger: Duration::from_millis(self.stagger_ms),
        })
    }

    /// Catalog file to load, if any; `--catalog` wins over `catalog_path`.
    pub fn resolve_catalog_path<'a>(&'a self, cli: &'a CliOverrides) -> Option<&'a Path> {
        cli.catalog_path
            .as_deref()
            .or(self.catalog_path.as_deref())
    }

    /// Top-level keys that this version does not understand.
    pub fn unknown_keys(content: &str) -> Vec<String> {
        match content.parse::<toml::Table>() {
            Ok(raw) => raw
                .keys()
                .filter(|key| !Self::KNOWN_KEYS.contains(&key.as_str()))
                .cloned()
                .collect(),
            Err(_) => Vec::new(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("topics_config_test_{}", name));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, "light");
        assert!(config.animations);
        assert_eq!(config.stagger_ms, 70);
        assert!(config.catalog_path.is_none());
        assert!(config.keybindings.is_empty());
    }

    #[test]
    fn test_missing_file_returns_default() {
        let path = Path::new("/tmp/topics_test_nonexistent_config.toml");
        let config = Config::load(path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_whitespace_only_file_returns_default() {
        let path = temp_config("whitespace", "   \n  \n  ");
        let config = Config::load(&path).unwrap();
        assert_eq!(config, Config::default());
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_partial_config_uses_defaults_for_missing() {
        let config = Config::parse("theme = \"dark\"\n").unwrap();
        assert_eq!(config.theme, "dark");
        assert!(config.animations);
        assert_eq!(config.stagger_ms, 70);
    }

    #[test]
    fn test_full_config() {
        let content = r#"
theme = "dark"
animations = false
stagger_ms = 120
catalog_path = "/srv/topics.toml"

[keybindings]
quit = "Ctrl+q"
toggle_theme = "F2"
"#;
        let path = temp_config("full", content);
        let config = Config::load(&path).unwrap();
        assert_eq!(config.theme, "dark");
        assert!(!config.animations);
        assert_eq!(config.stagger_ms, 120);
        assert_eq!(
            config.catalog_path.as_deref(),
            Some(Path::new("/srv/topics.toml"))
        );
        assert_eq!(
            config.keybindings.get("toggle_theme").map(String::as_str),
            Some("F2")
        );
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        let err = Config::parse("this is not [valid toml").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("Invalid TOML"));
    }

    #[test]
    fn test_wrong_type_returns_error() {
        assert!(Config::parse("animations = \"yes\"\n").is_err());
    }

    #[test]
    fn test_unknown_keys_accepted_and_reported() {
        let content = "theme = \"dark\"\ncolour_scheme = \"neon\"\n";
        let config = Config::parse(content).unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(Config::unknown_keys(content), vec!["colour_scheme"]);
    }

    #[test]
    fn test_cli_overrides_config() {
        let config = Config::parse("theme = \"dark\"\nstagger_ms = 40\n").unwrap();

        let options = config.app_options(&CliOverrides::default()).unwrap();
        assert_eq!(options.theme, ThemeVariant::Dark);
        assert!(options.animations);
        assert_eq!(options.stagger, Duration::from_millis(40));

        let cli = CliOverrides {
            theme: Some("light".to_string()),
            no_animation: true,
            catalog_path: None,
        };
        let options = config.app_options(&cli).unwrap();
        assert_eq!(options.theme, ThemeVariant::Light);
        assert!(!options.animations);
    }

    #[test]
    fn test_invalid_theme_value() {
        let config = Config::parse("theme = \"neon\"\n").unwrap();
        let err = config.app_options(&CliOverrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "theme", .. }));
        assert_eq!(err.to_string(), "Invalid value 'neon' for 'theme'");
    }

    #[test]
    fn test_catalog_path_precedence() {
        let config = Config::parse("catalog_path = \"/etc/topics.toml\"\n").unwrap();
        let mut cli = CliOverrides::default();
        assert_eq!(config.resolve_catalog_path(&cli), Some(Path::new("/etc/topics.toml")));

        cli.catalog_path = Some(PathBuf::from("./mine.toml"));
        assert_eq!(config.resolve_catalog_path(&cli), Some(Path::new("./mine.toml")));

        assert_eq!(Config::default().resolve_catalog_path(&CliOverrides::default()), None);
    }

    #[test]
    fn test_too_large_file_rejected() {
        let path = temp_config("too_large", &"a".repeat(1_048_577));
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::TooLarge(_)));
        assert!(err.to_string().contains("too large"));
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }
}
