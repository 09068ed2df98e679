use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::utils::paths::get_config_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,

    #[serde(default = "default_copy_key")]
    pub copy_key: String,
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_copy_key() -> String {
    "c".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            copy_key: default_copy_key(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&content)?;

        Ok(config)
    }

    /// First character of the configured copy key; falls back to 'c' if the
    /// config value is empty.
    pub fn copy_key_char(&self) -> char {
        self.copy_key.chars().next().unwrap_or('c')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, "default");
        assert_eq!(config.copy_key_char(), 'c');
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("theme"));
        assert!(toml_str.contains("copy_key"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
        theme = "dark"
        copy_key = "y"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.copy_key_char(), 'y');
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str(r#"theme = "light""#).unwrap();
        assert_eq!(config.theme, "light");
        assert_eq!(config.copy_key, "c");
    }

    #[test]
    fn test_empty_copy_key_falls_back() {
        let config: Config = toml::from_str(r#"copy_key = """#).unwrap();
        assert_eq!(config.copy_key_char(), 'c');
    }
}
