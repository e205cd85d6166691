//! Key-value persistence for the last used color and the saved palette.
//!
//! The picker only needs a string-keyed store. [`MemoryStore`] keeps values for
//! the lifetime of the process; [`FileStore`] keeps them in a small JSON object
//! on disk, written atomically on every change.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::collection::{SavePolicy, SavedColors};
use crate::hex::{Hex, normalize_hex};

/// Key holding the most recently applied color.
pub const LAST_USED_COLOR_KEY: &str = "colorizer-last-used-color";

/// Key holding the saved colors as a JSON array.
pub const SAVED_COLORS_KEY: &str = "colorizer-saved-colors";

/// Errors raised by storage backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("store file {path} is not a JSON object of strings: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize store: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A string-keyed, string-valued store.
///
/// Implement this for your persistence backend (browser storage, a settings
/// file, a database row) to let [`ColorStore`] persist through it.
pub trait KeyValueStore {
    /// Returns the value for `key`, if set.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Sets `key` to `value`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-process store backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);
        Ok(())
    }
}

/// Store persisted as a JSON object of strings in one file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`. A missing file opens as an empty store.
    ///
    /// # Errors
    /// `Io` if the file exists but cannot be read, `Corrupt` if it does not
    /// hold a JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).map_err(|source| StoreError::Corrupt {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no store file yet, starting empty");
                BTreeMap::new()
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        Ok(Self { path, values })
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // Atomic write: write to .tmp, then rename.
    fn flush(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.values)?;
        let io_error = |path: &Path| {
            let path = path.to_path_buf();
            move |source| StoreError::Io { path, source }
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_error(parent))?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, &json).map_err(io_error(&tmp_path))?;

        if let Err(e) = std::fs::rename(&tmp_path, &self.path) {
            warn!("atomic rename failed ({e}), falling back to direct write");
            std::fs::write(&self.path, &json).map_err(io_error(&self.path))?;
        }

        debug!(path = %self.path.display(), "store saved to disk");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value.to_owned());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.values.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// The picker's persisted state on top of a [`KeyValueStore`].
#[derive(Debug)]
pub struct ColorStore<S: KeyValueStore> {
    store: S,
    policy: SavePolicy,
}

impl<S: KeyValueStore> ColorStore<S> {
    /// Wraps a store; `policy` caps the saved colors.
    pub fn new(store: S, policy: SavePolicy) -> Self {
        Self { store, policy }
    }

    /// Returns the last used color if one is stored and still valid.
    pub fn last_used(&self) -> Result<Option<Hex>, StoreError> {
        let stored = self.store.get(LAST_USED_COLOR_KEY)?;
        Ok(stored.and_then(|text| normalize_hex(&text).ok()))
    }

    /// Records the last used color.
    pub fn set_last_used(&mut self, hex: &Hex) -> Result<(), StoreError> {
        self.store.set(LAST_USED_COLOR_KEY, hex.as_str())
    }

    /// Returns the color to show on startup.
    ///
    /// Falls back to `default` when nothing valid is stored, and records the
    /// fallback as the last used color.
    pub fn initial_color(&mut self, default: &Hex) -> Result<Hex, StoreError> {
        if let Some(hex) = self.last_used()? {
            return Ok(hex);
        }

        debug!(color = %default, "no last used color, storing default");
        self.set_last_used(default)?;
        Ok(default.clone())
    }

    /// Loads the saved colors. Missing or corrupt data loads as empty.
    pub fn saved_colors(&self) -> Result<SavedColors, StoreError> {
        Ok(match self.store.get(SAVED_COLORS_KEY)? {
            Some(json) => SavedColors::from_json(&json, self.policy),
            None => SavedColors::new(self.policy),
        })
    }

    /// Saves a color at the front of the palette and makes it the last used color.
    pub fn save_color(&mut self, hex: &Hex) -> Result<SavedColors, StoreError> {
        let mut saved = self.saved_colors()?;
        saved.add(hex.clone());
        self.store.set(SAVED_COLORS_KEY, &saved.to_json())?;
        self.set_last_used(hex)?;
        Ok(saved)
    }

    /// Deletes a color from the palette, matching case-insensitively.
    pub fn delete_color(&mut self, color: &str) -> Result<SavedColors, StoreError> {
        let mut saved = self.saved_colors()?;
        if saved.remove(color) {
            self.store.set(SAVED_COLORS_KEY, &saved.to_json())?;
        }
        Ok(saved)
    }

    /// Returns the underlying store.
    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Unwraps the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn hex(text: &str) -> Hex {
        normalize_hex(text).unwrap()
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set(LAST_USED_COLOR_KEY, "#123456").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get(LAST_USED_COLOR_KEY).unwrap().as_deref(),
            Some("#123456")
        );
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn file_store_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path().join("absent.json")).unwrap();
        assert_eq!(store.get(SAVED_COLORS_KEY).unwrap(), None);
    }

    #[test]
    fn file_store_rejects_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let result = FileStore::open(&path);
        assert!(matches!(result, Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn file_store_remove_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("a", "1").unwrap();
        store.remove("a").unwrap();
        store.remove("never-set").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("a").unwrap(), None);
    }

    #[test]
    fn invalid_last_used_is_ignored() {
        let mut inner = MemoryStore::new();
        inner.set(LAST_USED_COLOR_KEY, "not a color").unwrap();
        let mut store = ColorStore::new(inner, SavePolicy::unlimited());

        let initial = store.initial_color(&hex("#0080ff")).unwrap();
        assert_eq!(initial.as_str(), "#0080ff");
        assert_eq!(store.last_used().unwrap(), Some(hex("#0080ff")));
    }
}
