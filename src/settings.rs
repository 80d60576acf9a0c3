//! Locally persisted settings, the storage-override equivalent of the
//! original client: a JSON file holding the optional base-URL override.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Compiled-in API origin used when no override is stored
pub const DEFAULT_BASE_URL: &str = "https://api.gz4nna.com";
const DEFAULT_ADMIN_TOKEN: &str = "gz4nna_admin_token";
const SETTINGS_FILE: &str = "goldprice_settings.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub base_url: Option<String>,
}

impl Settings {
    /// Settings file location, overridable via GOLDPRICE_SETTINGS_PATH
    pub fn default_path() -> PathBuf {
        env::var("GOLDPRICE_SETTINGS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(SETTINGS_FILE))
    }

    /// Load settings, falling back to defaults when the file is missing
    /// or malformed
    pub fn load_from(path: &Path) -> Settings {
        match fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Ignoring malformed settings file {}: {}", path.display(), e);
                Settings::default()
            }),
            Err(_) => Settings::default(),
        }
    }

    pub fn load() -> Settings {
        Self::load_from(&Self::default_path())
    }

    pub fn store_to(&self, path: &Path) -> Result<(), String> {
        let raw = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;
        fs::write(path, raw).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
    }

    pub fn store(&self) -> Result<(), String> {
        self.store_to(&Self::default_path())
    }

    /// Stored override, then environment, then the compiled-in default
    pub fn resolve_base_url(&self) -> String {
        if let Some(url) = &self.base_url {
            if !url.is_empty() {
                return url.clone();
            }
        }
        env::var("GOLDPRICE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
    }
}

/// Static admin token attached to every request
pub fn admin_token() -> String {
    env::var("GOLDPRICE_ADMIN_TOKEN").unwrap_or_else(|_| DEFAULT_ADMIN_TOKEN.to_string())
}
