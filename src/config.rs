use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::ActiveChapter;

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    pub theme: ThemeConfig,
    pub panel: PanelConfig,
    pub font: FontConfig,
    pub nav: NavConfig,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Panel layout configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PanelConfig {
    /// Width of the navigation sidebar (in pixels)
    pub sidebar_width: f32,
}

/// Font and text rendering configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FontConfig {
    /// Size of body text (in points)
    pub body_size: f32,
    /// Size of code block text (in points)
    pub code_size: f32,
}

/// Navigation startup configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NavConfig {
    /// Section shown on startup
    pub default_section: String,
    /// Page shown on startup; empty means the section overview
    pub default_page: String,
    /// Group identities expanded on startup
    pub expanded_groups: Vec<String>,
}

impl NavConfig {
    /// The chapter selected when the app opens.
    pub fn default_chapter(&self) -> ActiveChapter {
        let page = if self.default_page.is_empty() {
            None
        } else {
            Some(self.default_page.as_str())
        };
        ActiveChapter::new(&self.default_section, page)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: ThemeConfig {
                mode: "dark".to_string(),
            },
            panel: PanelConfig {
                sidebar_width: 240.0,
            },
            font: FontConfig {
                body_size: 14.0,
                code_size: 12.0,
            },
            nav: NavConfig {
                default_section: "start".to_string(),
                default_page: "Introduction".to_string(),
                expanded_groups: Vec::new(),
            },
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "cubedocs") {
            let config_dir = proj_dirs.config_dir();
            return Some(config_dir.join("config.toml"));
        }
        None
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<Config>(&contents) {
                        Ok(config) => return config,
                        Err(e) => {
                            log::warn!("failed to parse config file: {e}, using defaults");
                        }
                    },
                    Err(e) => {
                        log::warn!("failed to read config file: {e}, using defaults");
                    }
                }
            }
        }
        Config::default()
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }

            let contents = toml::to_string_pretty(self)?;
            fs::write(&path, contents)?;
            return Ok(());
        }

        Err("Could not determine config directory".into())
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = Self::config_path() {
            if !path.exists() {
                let config = Config::default();
                config.save()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.panel.sidebar_width, 240.0);
        assert_eq!(config.nav.default_section, "start");
        assert_eq!(config.nav.default_page, "Introduction");
        assert!(config.nav.expanded_groups.is_empty());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config.theme.mode, deserialized.theme.mode);
        assert_eq!(
            config.nav.default_section,
            deserialized.nav.default_section
        );
    }

    #[test]
    fn test_default_chapter_resolution() {
        let mut config = Config::default();
        assert_eq!(
            config.nav.default_chapter(),
            ActiveChapter::new("start", Some("Introduction"))
        );

        config.nav.default_page.clear();
        assert_eq!(
            config.nav.default_chapter(),
            ActiveChapter::new("start", None)
        );
    }
}
