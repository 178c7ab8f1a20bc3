use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::ToastError;

static MAIN_BUNDLE: OnceLock<Bundle> = OnceLock::new();

/// Key to text catalog used to localize toast messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    name: String,
    messages: HashMap<String, String>,
}

#[derive(Deserialize)]
struct BundleFile {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    messages: HashMap<String, String>,
}

impl Bundle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: HashMap::new(),
        }
    }

    pub fn with_message(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.messages.insert(key.into(), text.into());
        self
    }

    /// The application-wide bundle. Empty until [`Bundle::install_main`] runs.
    pub fn main() -> &'static Bundle {
        MAIN_BUNDLE.get_or_init(|| Bundle::new("main"))
    }

    /// Install the application-wide bundle. Only the first call (made before
    /// any message lookup) takes effect.
    pub fn install_main(bundle: Bundle) -> Result<(), ToastError> {
        MAIN_BUNDLE
            .set(bundle)
            .map_err(|_| ToastError::MainBundleInstalled)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ToastError> {
        let file: BundleFile =
            toml::from_str(content).map_err(|e| ToastError::InvalidBundle(e.to_string()))?;

        Ok(Self {
            name: file.name.unwrap_or_else(|| "main".to_string()),
            messages: file.messages,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ToastError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Look up `key`, returning the key itself when no translation exists
    pub fn localize<'a>(&'a self, key: &'a str) -> &'a str {
        self.messages.get(key).map(String::as_str).unwrap_or(key)
    }
}

#[cfg(test)]
#[path = "bundle_tests.rs"]
mod bundle_tests;
