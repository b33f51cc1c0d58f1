//! Key-value persistence for the small profile state, one JSON file per
//! key under the configured storage directory.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Serialize, de::DeserializeOwned};

/// The persisted keys. Everything else the application computes lives
/// only for the duration of one invocation.
pub mod keys {
    pub const USER: &str = "user";
    pub const FAVORITE_RECIPES: &str = "favoriteRecipes";
    pub const FAVORITE_SWAPS: &str = "favoriteSwaps";
    pub const USED_ALTERNATIVES: &str = "usedAlternatives";
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage io: {0}")]
    Io(#[from] io::Error),

    #[error("storage encode: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Load the value stored under `key`. Missing, unreadable and corrupt
    /// values all load as absent; corruption is logged and never fails a
    /// read.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path(key);
        let raw = match fs::read(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!("failed to read {}: {err}", path.display());
                return None;
            }
        };

        match serde_json::from_slice(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!("discarding corrupt value for {key}: {err}");
                None
            }
        }
    }

    pub fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.load(key).unwrap_or_default()
    }

    /// Save `value` under `key`, creating the storage directory on first
    /// write.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let body = serde_json::to_vec_pretty(value)?;
        fs::write(self.path(key), body)?;
        Ok(())
    }

    /// Remove the value stored under `key`. Removing an absent key is a
    /// no-op.
    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
