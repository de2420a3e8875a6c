//! Session stores
//!
//! The session record is the only persisted state. A store holds at most one
//! raw JSON string; absence means logged out.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use super::error::SessionResult;

/// Key-value slot holding the raw session record
pub trait SessionStore {
    /// Read the raw record, if any
    fn load(&self) -> SessionResult<Option<String>>;

    /// Replace the raw record
    fn save(&self, raw: &str) -> SessionResult<()>;

    /// Remove the record
    fn clear(&self) -> SessionResult<()>;
}

/// In-memory store, used by tests and as a fallback when no storage exists
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw record
    pub fn with_record(raw: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(raw.into())),
        }
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> SessionResult<Option<String>> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, raw: &str) -> SessionResult<()> {
        *self.slot.borrow_mut() = Some(raw.to_string());
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn load(&self) -> SessionResult<Option<String>> {
        (**self).load()
    }

    fn save(&self, raw: &str) -> SessionResult<()> {
        (**self).save(raw)
    }

    fn clear(&self) -> SessionResult<()> {
        (**self).clear()
    }
}

/// Session record kept in a JSON file, the terminal counterpart of
/// browser localStorage
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> SessionResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, raw: &str) -> SessionResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);

        store.save("{}").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("{}"));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("session.json"));

        assert_eq!(store.load().unwrap(), None);

        store.save("{\"email\":\"a\"}").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("{\"email\":\"a\"}"));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_file_store_clear_missing_is_ok() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));
        assert!(store.clear().is_ok());
    }
}
