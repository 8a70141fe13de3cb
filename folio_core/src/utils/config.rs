use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Persisted value for the light theme preference.
pub const THEME_LIGHT: &str = "light";
/// Persisted value for the dark theme preference.
pub const THEME_DARK: &str = "dark";

/// User configuration persisted at `~/.folio/config.yaml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Theme preference: `"light"` or `"dark"`. Absent until the user
    /// toggles for the first time, at which point the system preference
    /// stops mattering across restarts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn get_config_path() -> String {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        format!("{}/.folio/config.yaml", home)
    }

    pub fn load_or_default() -> Result<Self> {
        let config_path = Self::get_config_path();
        let config_file = Path::new(&config_path);

        // Try to load existing config
        if config_file.exists() {
            if let Ok(config) = Self::load_from_file(config_file) {
                return Ok(config);
            }
        }

        // Return default config if loading fails
        Ok(Self::default())
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path();
        self.save_to_file(config_path)
    }

    /// Returns the persisted theme name, if any.
    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    /// Records a theme preference. Only `"light"` and `"dark"` are ever
    /// written by the frontend; anything else is kept verbatim and simply
    /// fails to resolve on the next startup.
    pub fn set_theme(&mut self, name: &str) {
        self.theme = Some(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_theme() {
        let config = Config::default();
        assert!(config.theme().is_none());
    }

    #[test]
    fn set_theme_overwrites_previous_value() {
        let mut config = Config::default();
        config.set_theme(THEME_LIGHT);
        config.set_theme(THEME_DARK);
        assert_eq!(config.theme(), Some(THEME_DARK));
    }

    #[test]
    fn theme_survives_yaml_round_trip() {
        let mut config = Config::default();
        config.set_theme(THEME_LIGHT);

        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("theme"));
        assert!(yaml.contains("light"));

        let restored: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(restored.theme(), Some(THEME_LIGHT));
    }

    #[test]
    fn absent_theme_is_not_serialized() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        assert!(!yaml.contains("theme"));
    }
}
