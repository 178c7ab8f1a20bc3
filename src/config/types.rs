// Configuration type definitions

use std::path::PathBuf;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::toast::{ToastEdge, ToastLength};

fn default_auto_dismiss() -> bool {
    true
}

/// Toast presentation section
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ToastConfig {
    #[serde(default)]
    pub edge: ToastEdge,
    #[serde(default)]
    pub length: ToastLength,
    #[serde(default = "default_auto_dismiss")]
    pub auto_dismiss: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        ToastConfig {
            edge: ToastEdge::Top,
            length: ToastLength::Short,
            auto_dismiss: true,
            text_color: None,
            background_color: None,
        }
    }
}

/// Localization section
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct LocaleConfig {
    /// TOML file with a `[messages]` table installed as the main bundle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle: Option<PathBuf>,
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub toast: ToastConfig,
    #[serde(default)]
    pub locale: LocaleConfig,
}
