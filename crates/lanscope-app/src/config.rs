//! Settings loaded from the platform config dir, overridable from the CLI.
//!
//! A missing config file is the normal case and yields defaults; an invalid
//! file is logged and also yields defaults rather than aborting startup.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Top-level settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub behavior: BehaviorSettings,
    pub ui: UiSettings,
}

/// Scan service connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Base URL of the scan service
    pub url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:5050".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ServerSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Startup behavior settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorSettings {
    /// Trigger a scan immediately on startup instead of waiting for the key
    pub auto_scan: bool,
}

/// Icon rendering mode for category icons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconMode {
    /// Emoji icons (📱 🌐 🔧 ❓)
    #[default]
    Emoji,
    /// Plain ASCII fallback for terminals without emoji fonts
    Ascii,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub icons: IconMode,
}

/// Path of the user config file (e.g. `~/.config/lanscope/config.toml`)
pub fn config_file_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("lanscope").join("config.toml")
}

/// Load settings from the default location
pub fn load_settings() -> Settings {
    load_from(&config_file_path())
}

/// Load settings from a specific file
pub fn load_from(path: &Path) -> Settings {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => {
            debug!("no config file at {}, using defaults", path.display());
            return Settings::default();
        }
    };

    match toml::from_str(&raw) {
        Ok(settings) => {
            debug!("loaded settings from {}", path.display());
            settings
        }
        Err(e) => {
            warn!("invalid config file {}: {}", path.display(), e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.url, "http://127.0.0.1:5050");
        assert_eq!(settings.server.timeout_secs, 30);
        assert_eq!(settings.server.timeout(), Duration::from_secs(30));
        assert!(!settings.behavior.auto_scan);
        assert_eq!(settings.ui.icons, IconMode::Emoji);
    }

    #[test]
    fn test_parse_full_config() {
        let settings: Settings = toml::from_str(
            r#"
            [server]
            url = "http://192.168.1.5:8080"
            timeout_secs = 10

            [behavior]
            auto_scan = true

            [ui]
            icons = "ascii"
            "#,
        )
        .unwrap();

        assert_eq!(settings.server.url, "http://192.168.1.5:8080");
        assert_eq!(settings.server.timeout_secs, 10);
        assert!(settings.behavior.auto_scan);
        assert_eq!(settings.ui.icons, IconMode::Ascii);
    }

    #[test]
    fn test_parse_partial_config_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [server]
            url = "http://10.0.0.2:5050"
            "#,
        )
        .unwrap();

        assert_eq!(settings.server.url, "http://10.0.0.2:5050");
        // Unspecified fields keep their defaults
        assert_eq!(settings.server.timeout_secs, 30);
        assert!(!settings.behavior.auto_scan);
        assert_eq!(settings.ui.icons, IconMode::Emoji);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let settings = load_from(Path::new("/nonexistent/lanscope/config.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[behavior]\nauto_scan = true\n").unwrap();

        let settings = load_from(&path);
        assert!(settings.behavior.auto_scan);
        assert_eq!(settings.server, ServerSettings::default());
    }

    #[test]
    fn test_load_from_invalid_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is { not toml").unwrap();

        let settings = load_from(&path);
        assert_eq!(settings, Settings::default());
    }
}
