//! Per-profile settings file on local disk.
//!
//! Every profile lives in `<home>/.deis/<profile>.json`. The directory is
//! shared by all profiles; each operation touches only the file it is given.
//! The payload is opaque here, see [`crate::settings`] for its schema.
//!
//! There is no locking. Concurrent writers to the same profile race and the
//! last one wins.

use crate::error::StoreError;
use std::ffi::{OsStr, OsString};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Directory under the home directory holding every profile.
pub const SETTINGS_DIR: &str = ".deis";

/// Profile used when no override is set.
pub const DEFAULT_PROFILE: &str = "client";

/// Environment variable selecting the active profile.
pub const PROFILE_ENV_VAR: &str = "DEIS_PROFILE";

#[cfg(windows)]
const HOME_ENV_VAR: &str = "USERPROFILE";
#[cfg(not(windows))]
const HOME_ENV_VAR: &str = "HOME";

/// The two environment inputs profile resolution depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileEnv {
    pub home: Option<OsString>,
    pub profile: Option<OsString>,
}

impl ProfileEnv {
    pub fn new(home: impl Into<OsString>, profile: Option<&str>) -> Self {
        Self {
            home: Some(home.into()),
            profile: profile.map(OsString::from),
        }
    }

    /// Snapshot the current process environment.
    ///
    /// Reads the variables on every call so that a changed environment is
    /// always observed.
    pub fn from_process() -> Self {
        Self {
            home: std::env::var_os(HOME_ENV_VAR),
            profile: std::env::var_os(PROFILE_ENV_VAR),
        }
    }

    /// Resolved profile name. An empty override counts as unset.
    pub fn profile_name(&self) -> &OsStr {
        match self.profile.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => OsStr::new(DEFAULT_PROFILE),
        }
    }
}

/// Path of the active profile's settings file. Does not touch the filesystem.
///
/// Without a home directory the result is relative to the working
/// directory; it is still a valid path and any failure shows up once it is
/// used.
///
/// The result always stays under `<home>/.deis`: root, prefix, `.` and `..`
/// components of the profile name are dropped.
pub fn locate(env: &ProfileEnv) -> PathBuf {
    let mut path = env.home.as_ref().map(PathBuf::from).unwrap_or_default();
    path.push(SETTINGS_DIR);

    let mut file = env.profile_name().to_os_string();
    file.push(".json");
    path.extend(
        Path::new(&file)
            .components()
            .filter(|c| matches!(c, Component::Normal(_))),
    );
    path
}

/// Write `content` to `path`, creating the parent directory if needed.
///
/// An existing file is truncated and replaced, never appended to.
pub fn create_profile(path: &Path, content: &str) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        // create_dir_all succeeds when another process wins the race.
        std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, content).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = content.len(), "profile written");
    Ok(())
}

/// Full content of the settings file at `path`.
pub fn read_profile(path: &Path) -> Result<String, StoreError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            debug!(path = %path.display(), bytes = content.len(), "profile read");
            Ok(content)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no profile file");
            Err(StoreError::NotFound { path: path.to_path_buf() })
        }
        Err(source) => Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Remove the settings file at `path`. A missing file is not an error.
pub fn delete_profile(path: &Path) -> Result<(), StoreError> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "profile deleted");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "profile already absent");
            Ok(())
        }
        Err(source) => Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
