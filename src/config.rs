//! Configuration module
//!
//! Reads `~/.config/toast/config.toml`. Every field is optional; a missing
//! or broken file falls back to defaults.

mod loader;
mod types;

pub use loader::{ConfigResult, config_path, load_config, load_config_from_path, parse_config};
pub use types::{Config, LocaleConfig, ToastConfig};
