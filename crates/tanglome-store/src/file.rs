//! File-backed token storage.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::{debug, warn};

use tanglome_core::error::StorageError;
use tanglome_core::{AuthToken, Result, TokenStore};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Token storage backed by a single file.
///
/// The token is stored as the raw string under one well-known path; there
/// is no structured schema. The default location is the platform data
/// directory.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Create a store at the platform's default data directory.
    ///
    /// # Errors
    ///
    /// Fails when no data directory can be determined or created.
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "tanglome").ok_or(StorageError::NoDataDir)?;

        let data_dir = dirs.data_dir();
        fs::create_dir_all(data_dir).map_err(|e| StorageError::Io {
            message: e.to_string(),
        })?;

        Ok(Self {
            path: data_dir.join("token"),
        })
    }

    /// Create a store at an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the token file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<AuthToken> {
        if !self.path.exists() {
            return None;
        }

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read token file");
                return None;
            }
        };

        let raw = raw.trim();
        if raw.is_empty() {
            warn!(path = %self.path.display(), "Token file is empty");
            return None;
        }

        Some(AuthToken::new(raw))
    }

    fn save(&self, token: &AuthToken) -> Result<()> {
        fs::write(&self.path, token.as_str()).map_err(|e| StorageError::Io {
            message: e.to_string(),
        })?;

        // Set restrictive permissions (Unix only)
        #[cfg(unix)]
        {
            let set_mode = fs::metadata(&self.path).and_then(|meta| {
                let mut perms = meta.permissions();
                perms.set_mode(0o600);
                fs::set_permissions(&self.path, perms)
            });
            if let Err(e) = set_mode {
                return Err(StorageError::Io {
                    message: e.to_string(),
                }
                .into());
            }
        }

        debug!(path = %self.path.display(), "Token persisted");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| StorageError::Io {
                message: e.to_string(),
            })?;
            debug!(path = %self.path.display(), "Token cleared");
        }
        Ok(())
    }
}
