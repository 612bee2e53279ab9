use crate::error::StoreError;
use crate::profile::{create_profile, delete_profile, read_profile};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Session state persisted in a profile's settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub username: String,

    #[serde(default = "default_ssl_verify")]
    pub ssl_verify: bool,

    /// Controller base URL.
    #[serde(default)]
    pub controller: String,

    #[serde(default)]
    pub token: String,

    /// Page size requested from list endpoints.
    #[serde(default = "default_response_limit")]
    pub response_limit: u32,
}

fn default_ssl_verify() -> bool { true }
fn default_response_limit() -> u32 { 100 }

impl Default for Settings {
    fn default() -> Self {
        Self {
            username: String::new(),
            ssl_verify: default_ssl_verify(),
            controller: String::new(),
            token: String::new(),
            response_limit: default_response_limit(),
        }
    }
}

impl Settings {
    /// Load and decode the settings file at `path`.
    ///
    /// * missing file → [`StoreError::NotFound`]
    /// * unreadable   → [`StoreError::Io`]
    /// * bad JSON     → [`StoreError::Malformed`]
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let content = read_profile(path)?;
        serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Encode and write to `path`, replacing any previous content.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| StoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        create_profile(path, &json)
    }

    /// Remove the settings file at `path` (logout).
    pub fn delete(path: &Path) -> Result<(), StoreError> {
        delete_profile(path)
    }

    /// True once a login has stored a token for a controller.
    pub fn is_logged_in(&self) -> bool {
        !self.controller.is_empty() && !self.token.is_empty()
    }
}
