use std::path::Path;

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::http::DEFAULT_BASE_URL,
    persistence,
    translations::{
        self,
        DEFAULT_TRANSLATION,
    },
};

const SETTINGS_FILE: &str = "settings.json";

/// Reader configuration. Only these two values are written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderSettings {
    pub api_base_url: String,
    pub default_translation: String,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            default_translation: DEFAULT_TRANSLATION.to_string(),
        }
    }
}

impl ReaderSettings {
    pub fn load() -> Self {
        persistence::load_json_or_default::<Self>(SETTINGS_FILE).sanitized()
    }

    pub fn load_from(dir: &Path) -> Self {
        persistence::load_json_or_default_in::<Self>(dir, SETTINGS_FILE).sanitized()
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        persistence::save_json(self, SETTINGS_FILE)
    }

    pub fn save_to(&self, dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
        persistence::save_json_in(dir, self, SETTINGS_FILE)
    }

    /// Replaces a stored translation that is no longer registered with the default.
    fn sanitized(mut self) -> Self {
        if translations::translation(&self.default_translation).is_none() {
            tracing::warn!(
                "Stored translation '{}' is not registered, using '{}'",
                self.default_translation,
                DEFAULT_TRANSLATION
            );
            self.default_translation = DEFAULT_TRANSLATION.to_string();
        }
        if self.api_base_url.trim().is_empty() {
            self.api_base_url = DEFAULT_BASE_URL.to_string();
        }
        self
    }
}
