use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the settings store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No settings file for this profile yet. Usually means "log in first".
    #[error("settings file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was readable but its content is not valid session state.
    #[error("malformed settings file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            StoreError::NotFound { path }
            | StoreError::Io { path, .. }
            | StoreError::Malformed { path, .. } => path,
        }
    }
}
