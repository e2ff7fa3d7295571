use crate::menu::Catalog;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"[menu]
# Path to a TOML menu file; leave empty for the built-in food truck menu
path = ""

[telemetry]
enabled = false
log_path = "~/.foodtruck-voice/voice.log"
"#;

/// Application configuration loaded from `~/.foodtruck-voice.toml`
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Menu catalog source
    pub menu: MenuConfig,
    /// Logging destination
    pub telemetry: TelemetryConfig,
}

/// Where the menu catalog comes from
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct MenuConfig {
    /// Path to a TOML catalog, empty for the built-in menu
    #[serde(default)]
    pub path: String,
}

/// Logging settings
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Write logs to `log_path` instead of stdout
    pub enabled: bool,
    /// Log file path (`~/` is expanded)
    pub log_path: String,
}

impl Config {
    /// Load config from ~/.foodtruck-voice.toml, creating it with defaults if missing
    ///
    /// # Errors
    /// Returns error if HOME is unset or the file can't be created, read or parsed
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default(&config_path).context("failed to create default config")?;
        }

        Self::load_from(&config_path)
    }

    /// Load config from an explicit path
    ///
    /// # Errors
    /// Returns error if the file can't be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).context("failed to read config file")?;
        Self::parse(&contents)
    }

    /// Parse config from TOML text
    ///
    /// # Errors
    /// Returns error if the TOML is malformed or missing sections
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse config TOML")
    }

    /// Load the configured catalog, falling back to the built-in menu
    ///
    /// # Errors
    /// Returns error if the configured catalog file is unreadable or invalid
    pub fn catalog(&self) -> Result<Catalog> {
        if self.menu.path.trim().is_empty() {
            return Catalog::builtin().context("built-in menu is invalid");
        }

        let path = Self::expand_path(&self.menu.path)?;
        Catalog::load(&path).with_context(|| format!("failed to load menu {}", path.display()))
    }

    fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME").context("HOME environment variable not set")?;
        Ok(PathBuf::from(home).join(".foodtruck-voice.toml"))
    }

    fn create_default(path: &Path) -> Result<()> {
        fs::write(path, DEFAULT_CONFIG).context("failed to write default config")?;
        Ok(())
    }

    /// Expand ~ in paths to home directory
    ///
    /// # Errors
    /// Returns error if the path starts with `~/` and HOME is unset
    pub fn expand_path(path: &str) -> Result<PathBuf> {
        if let Some(stripped) = path.strip_prefix("~/") {
            let home = std::env::var("HOME").context("HOME environment variable not set")?;
            Ok(PathBuf::from(home).join(stripped))
        } else {
            Ok(PathBuf::from(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "foodtruck_config_test_{}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_default_config_parses() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert!(config.menu.path.is_empty());
        assert!(!config.telemetry.enabled);
        assert_eq!(config.telemetry.log_path, "~/.foodtruck-voice/voice.log");
    }

    #[test]
    fn test_menu_path_optional() {
        let config = Config::parse(
            r#"[menu]

[telemetry]
enabled = true
log_path = "/tmp/voice.log"
"#,
        )
        .unwrap();
        assert_eq!(config.menu, MenuConfig::default());
        assert!(config.telemetry.enabled);
    }

    #[test]
    fn test_missing_section_fails() {
        assert!(Config::parse("[menu]\npath = \"\"\n").is_err());
    }

    #[test]
    fn test_empty_path_uses_builtin_catalog() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog, Catalog::builtin().unwrap());
    }

    #[test]
    fn test_catalog_from_file() {
        let menu = temp_file(
            "menu.toml",
            r#"
[[items]]
id = 1
name = "Elote"
price = 4.5
category = "sides"
description = "Street corn"
keywords = ["corn", "elote"]
"#,
        );
        let config = Config {
            menu: MenuConfig {
                path: menu.display().to_string(),
            },
            telemetry: TelemetryConfig {
                enabled: false,
                log_path: String::new(),
            },
        };
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.items()[0].name, "Elote");
    }

    #[test]
    fn test_catalog_invalid_file_fails() {
        let menu = temp_file("bad_menu.toml", "not = [valid");
        let config = Config {
            menu: MenuConfig {
                path: menu.display().to_string(),
            },
            telemetry: TelemetryConfig {
                enabled: false,
                log_path: String::new(),
            },
        };
        assert!(config.catalog().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_file("config.toml", DEFAULT_CONFIG);
        let config = Config::load_from(&path).unwrap();
        assert!(!config.telemetry.enabled);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let home = std::env::var("HOME").expect("HOME not set");
        let result = Config::expand_path("~/menus/food.toml").unwrap();
        assert_eq!(result, PathBuf::from(home).join("menus/food.toml"));
    }

    #[test]
    fn test_expand_path_without_tilde() {
        let result = Config::expand_path("/etc/foodtruck/menu.toml").unwrap();
        assert_eq!(result, PathBuf::from("/etc/foodtruck/menu.toml"));
    }
}
