use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::ToastError;

const CONFIG_DIR: &str = "toast";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus a message for the user when the file was unusable
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the user's config file. A missing file silently yields defaults.
pub fn load_config() -> ConfigResult {
    let Some(path) = config_path() else {
        return ConfigResult::default();
    };

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return ConfigResult::default(),
        Err(e) => {
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Could not read {}: {}", path.display(), e)),
            };
        }
    };

    match parse_config(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(format!("{} in {}, using defaults", e, path.display())),
        },
    }
}

pub fn parse_config(content: &str) -> Result<Config, ToastError> {
    toml::from_str(content).map_err(|e| ToastError::InvalidConfig(e.message().to_string()))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
