use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::DEFAULT_LANGUAGE;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub profile: ProfileSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

/// Output layout of the tracing subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event
    #[default]
    Json,
    Pretty,
    Compact,
    Full,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }

/// Defaults applied while turning requests into profiles
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileSettings {
    #[serde(default = "default_language")]
    pub default_language: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            default_language: default_language(),
        }
    }
}

fn default_language() -> String { DEFAULT_LANGUAGE.to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with TRAVEL__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., TRAVEL__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("TRAVEL")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, LogFormat::Json);
    }

    #[test]
    fn test_default_profile_language() {
        assert_eq!(ProfileSettings::default().default_language, "italian");
    }

    #[test]
    fn test_log_format_from_file() {
        let path = std::env::temp_dir().join(format!(
            "travel-match-logging-{}.toml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"\nformat = \"pretty\"").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_unknown_log_format_is_rejected() {
        let path = std::env::temp_dir().join(format!(
            "travel-match-bad-logging-{}.toml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[logging]\nformat = \"xml\"").unwrap();

        let result = Settings::load_from(&path);
        std::fs::remove_file(&path).ok();

        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file_fills_missing_sections() {
        let path = std::env::temp_dir().join(format!(
            "travel-match-settings-{}.toml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[server]\nport = 9090\n\n[profile]\ndefault_language = \"english\"").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.logging.format, LogFormat::Json);
        assert_eq!(settings.profile.default_language, "english");
    }
}
