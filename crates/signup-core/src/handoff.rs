//! Short-lived session storage and the training date handoff.
//!
//! The hero section writes the date a visitor picked under [`HANDOFF_KEY`]
//! just before sending them to the form. The form reads it once when it is
//! mounted and deletes it. [`TrainingDateHandoff`] is the only way the form
//! touches the store, so that write-once / take-once contract lives in one
//! place.
//!
//! Two stores are provided:
//!
//! - [`MemorySessionStore`] — in-process, for embedding and tests
//! - [`FileSessionStore`] — one file per key in a session directory

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::SessionStoreError;

/// Session key holding the preselected training date.
pub const HANDOFF_KEY: &str = "preselectedTrainingDate";

/// A per-session string key/value store.
pub trait SessionStore {
    /// Read a value. Returns `Ok(None)` if the key does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Read`] if the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError>;

    /// Store a value, overwriting any existing one.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Write`] if the store cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionStoreError>;

    /// Delete a key. Deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Delete`] if the store cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), SessionStoreError>;
}

/// Consume-once access to the preselected training date.
pub struct TrainingDateHandoff<'a, S: SessionStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: SessionStore + ?Sized> TrainingDateHandoff<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Leave a date for the form. Empty values are not stored.
    ///
    /// Returns whether a value was written.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the write fails.
    pub fn offer(&mut self, value: &str) -> Result<bool, SessionStoreError> {
        if value.is_empty() {
            return Ok(false);
        }
        self.store.set(HANDOFF_KEY, value)?;
        debug!(value, "training date handed off");
        Ok(true)
    }

    /// Take the date if one was left, deleting it from the store.
    ///
    /// A missing or empty value is the normal case. Store failures are logged
    /// and treated as absence.
    pub fn consume(&mut self) -> Option<String> {
        let value = match self.store.get(HANDOFF_KEY) {
            Ok(Some(v)) if !v.is_empty() => v,
            Ok(_) => return None,
            Err(err) => {
                warn!(error = %err, "could not read training date handoff");
                return None;
            }
        };
        if let Err(err) = self.store.remove(HANDOFF_KEY) {
            warn!(error = %err, "could not clear training date handoff");
        }
        debug!(value = %value, "training date handoff consumed");
        Some(value)
    }
}

/// In-memory session store.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    data: BTreeMap<String, String>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a key is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        self.data.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionStoreError> {
        self.data.remove(key);
        Ok(())
    }
}

/// Session store keeping each key in its own file under a directory.
///
/// The directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, SessionStoreError> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\'])
            && !key.contains('\0');
        if !valid {
            return Err(SessionStoreError::InvalidKey {
                key: key.to_owned(),
            });
        }
        Ok(self.dir.join(key))
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionStoreError::Read {
                key: key.to_owned(),
                reason: e.to_string(),
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)
            .and_then(|()| fs::write(&path, value))
            .map_err(|e| SessionStoreError::Write {
                key: key.to_owned(),
                reason: e.to_string(),
            })
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionStoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionStoreError::Delete {
                key: key.to_owned(),
                reason: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn consume_takes_the_value_once() {
        let mut store = MemorySessionStore::new();
        let stored = TrainingDateHandoff::new(&mut store)
            .offer("Scrum Master: 2 en 3 maart in Utrecht")
            .unwrap();
        assert!(stored);

        let mut handoff = TrainingDateHandoff::new(&mut store);
        assert_eq!(
            handoff.consume().as_deref(),
            Some("Scrum Master: 2 en 3 maart in Utrecht")
        );
        assert_eq!(handoff.consume(), None);
        assert!(!store.contains(HANDOFF_KEY));
    }

    #[test]
    fn empty_offer_is_not_stored() {
        let mut store = MemorySessionStore::new();
        assert!(!TrainingDateHandoff::new(&mut store).offer("").unwrap());
        assert!(!store.contains(HANDOFF_KEY));
    }

    #[test]
    fn absent_value_is_none() {
        let mut store = MemorySessionStore::new();
        assert_eq!(TrainingDateHandoff::new(&mut store).consume(), None);
    }

    #[test]
    fn file_store_roundtrip_and_idempotent_remove() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileSessionStore::new(dir.path().join("session"));

        assert_eq!(store.get(HANDOFF_KEY).unwrap(), None);
        store.set(HANDOFF_KEY, "Andere datum in overleg").unwrap();
        assert_eq!(
            store.get(HANDOFF_KEY).unwrap().as_deref(),
            Some("Andere datum in overleg")
        );
        store.remove(HANDOFF_KEY).unwrap();
        store.remove(HANDOFF_KEY).unwrap();
        assert_eq!(store.get(HANDOFF_KEY).unwrap(), None);
    }

    #[test]
    fn file_store_handoff_deletes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileSessionStore::new(dir.path());
        TrainingDateHandoff::new(&mut store)
            .offer("Product Owner: 20 en 21 april in Utrecht")
            .unwrap();
        assert!(dir.path().join(HANDOFF_KEY).exists());

        let taken = TrainingDateHandoff::new(&mut store).consume();
        assert_eq!(
            taken.as_deref(),
            Some("Product Owner: 20 en 21 april in Utrecht")
        );
        assert!(!dir.path().join(HANDOFF_KEY).exists());
    }

    #[test]
    fn file_store_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileSessionStore::new(dir.path());
        for key in ["", "..", "a/b", "a\\b"] {
            assert!(matches!(
                store.set(key, "x"),
                Err(SessionStoreError::InvalidKey { .. })
            ));
        }
    }
}
