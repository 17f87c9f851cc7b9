//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::shell::splash::DEFAULT_TAGLINE;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub splash: SplashConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Landing overlay configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SplashConfig {
    /// Whether a new session starts behind the landing overlay
    #[serde(default = "default_splash_enabled")]
    pub enabled: bool,

    #[serde(default = "default_tagline")]
    pub tagline: String,
}

fn default_splash_enabled() -> bool {
    true
}

fn default_tagline() -> String {
    DEFAULT_TAGLINE.to_string()
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            enabled: default_splash_enabled(),
            tagline: default_tagline(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_first(&default_config_paths())
    }

    /// Load the first file in `paths` that exists, or fall back to
    /// environment-only config when none does.
    ///
    /// A file that exists but cannot be read or parsed is an error; it is
    /// never skipped in favour of defaults.
    pub fn load_first(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        for path in paths {
            if path.exists() {
                let config = Self::load_with_env(path)?;
                tracing::info!("Loaded config from {:?}", path);
                return Ok(config);
            }
        }

        tracing::info!("Using default config with environment overrides");
        Ok(Self::from_env())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(splash) = std::env::var("TAURON_SPLASH") {
            if let Some(enabled) = parse_flag(&splash) {
                self.splash.enabled = enabled;
            }
        }

        if let Ok(level) = std::env::var("TAURON_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("TAURON_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Locations searched by [`Config::load_default`], in order
pub fn default_config_paths() -> Vec<PathBuf> {
    [
        dirs::config_dir().map(|p| p.join("tauron").join("config.toml")),
        Some(PathBuf::from("/etc/tauron/config.toml")),
        Some(PathBuf::from("./config.toml")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Parse an on/off style flag as found in env vars and element attributes
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Tauron Configuration
#
# Environment variables override these settings:
# - TAURON_SPLASH
# - TAURON_LOG_LEVEL
# - TAURON_LOG_FORMAT

[splash]
# Start each session behind the full-screen landing overlay
enabled = true

# Tagline shown under the logo
tagline = "Early warning for herd health, before symptoms show."

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.splash.enabled);
        assert_eq!(config.splash.tagline, DEFAULT_TAGLINE);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert!(config.splash.enabled);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[splash]\nenabled = false").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(!config.splash.enabled);
        assert_eq!(config.splash.tagline, DEFAULT_TAGLINE);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[splash\nenabled = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_first_reports_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[splash\nenabled = false").unwrap();

        let paths = [dir.path().join("missing.toml"), path.clone()];
        let err = Config::load_first(&paths).unwrap_err();
        match err {
            ConfigError::Parse { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("Expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn test_load_first_uses_first_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.toml");
        let second = dir.path().join("second.toml");
        std::fs::write(&first, "[splash]\ntagline = \"first\"").unwrap();
        std::fs::write(&second, "[splash\nbroken").unwrap();

        let paths = [dir.path().join("missing.toml"), first, second];
        let config = Config::load_first(&paths).unwrap();
        assert_eq!(config.splash.tagline, "first");
    }

    #[test]
    fn test_load_first_without_files_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_first(&[dir.path().join("missing.toml")]).unwrap();
        assert_eq!(config.splash.tagline, DEFAULT_TAGLINE);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag(" TRUE "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
