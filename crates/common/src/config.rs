//! Application configuration.
//!
//! The only state Framewall persists across sessions is the selected
//! frame color (plus logging preferences). Slot and image state is
//! deliberately ephemeral: nothing a user uploads ever leaves memory.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Selected frame color as a `#rrggbb` hex string.
    pub frame_color: String,

    /// Last time the configuration was written (ISO 8601).
    #[serde(default)]
    pub updated_at: String,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "framewall=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

/// Default frame color: the "Black" palette entry.
pub const DEFAULT_FRAME_COLOR: &str = "#111827";

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            frame_color: DEFAULT_FRAME_COLOR.to_string(),
            updated_at: String::new(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&mut self) -> Result<(), std::io::Error> {
        self.updated_at = chrono::Utc::now().to_rfc3339();
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("framewall").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_black_frame() {
        let config = AppConfig::default();
        assert_eq!(config.frame_color, DEFAULT_FRAME_COLOR);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = AppConfig::default();
        config.frame_color = "#5B3A29".to_string();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.frame_color, "#5B3A29");
    }

    #[test]
    fn test_config_deserialization_defaults_updated_at_for_legacy_files() {
        let mut value = serde_json::to_value(AppConfig::default()).unwrap();
        value
            .as_object_mut()
            .expect("config should be object")
            .remove("updated_at");

        let parsed: AppConfig = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.updated_at, "");
    }
}
