use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

const CONFIG_PATH_ENV_VAR: &str = "SPARROW_CONFIG_FILE";

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("sparrow").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".sparrow.toml"));
    }

    locations
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_color: String,
    pub today_symbol: String,
    pub show_past_events: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            default_color: "#3b82f6".to_string(),
            today_symbol: "*".to_string(),
            show_past_events: true,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

pub fn load_suitable_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::load(path);
    }

    for location in find_configfile_locations() {
        if location.exists() {
            log::info!("using config file {}", location.display());
            return Config::load(&location);
        }
    }

    log::debug!("no config file found, using defaults");
    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_falls_back_to_defaults() {
        let config: Config = toml::from_str("today_symbol = \">\"").unwrap();

        assert_eq!(config.today_symbol, ">");
        assert_eq!(config.default_color, "#3b82f6");
        assert!(config.show_past_events);
    }

    #[test]
    fn full_document_parses() {
        let config: Config = toml::from_str(
            "default_color = \"#22c55e\"\ntoday_symbol = \"!\"\nshow_past_events = false\n",
        )
        .unwrap();

        assert_eq!(config.default_color, "#22c55e");
        assert_eq!(config.today_symbol, "!");
        assert!(!config.show_past_events);
    }

    #[test]
    fn unreadable_config_is_an_error() {
        assert!(Config::load(Path::new("/definitely/not/here.toml")).is_err());
    }
}
