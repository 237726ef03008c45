/*
[INPUT]:  User records and a cache file location
[OUTPUT]: Persisted session state restored across restarts
[POS]:    Session layer - local persistence for the cached user
[UPDATE]: When the cache format or file location changes
*/

use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::UserData;

const CACHE_FILE_NAME: &str = "session.json";

#[derive(Debug, Serialize, Deserialize)]
struct CachedSession {
    user_info: UserData,
    cached_at: DateTime<Utc>,
}

/// File-backed persistence of the last fetched user record.
///
/// The storage format is private to this module; callers only read and
/// clear the cached user.
#[derive(Debug, Clone)]
pub struct SessionCache {
    path: PathBuf,
}

impl SessionCache {
    /// Create a cache at an explicit file path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a cache inside the given directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(CACHE_FILE_NAME))
    }

    /// Default location: `./.idport-config/session.json` relative to the
    /// current working directory.
    pub fn default_location() -> Self {
        let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::in_dir(base_dir.join(".idport-config"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the cached user, if any.
    ///
    /// Missing or corrupt files and records without an account name all
    /// read as "no cached session".
    pub fn load(&self) -> Option<UserData> {
        let content = fs::read_to_string(&self.path).ok()?;
        let cached: CachedSession = serde_json::from_str(&content).ok()?;
        if cached.user_info.account_name.is_empty() {
            return None;
        }
        Some(cached.user_info)
    }

    /// Persist a user record, replacing any previous one.
    pub fn save(&self, user: &UserData) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let cached = CachedSession {
            user_info: user.clone(),
            cached_at: Utc::now(),
        };
        let content = serde_json::to_string_pretty(&cached)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, content)?;

        let mut perms = fs::metadata(&self.path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&self.path, perms)?;

        Ok(())
    }

    /// Remove the cached session; a missing file is not an error.
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }
}
