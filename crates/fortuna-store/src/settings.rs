//! File-backed key-value settings store.
//!
//! A single JSON object file holding one value per key. This is the durable
//! home of the reading history (under [`crate::READINGS_KEY`]); values are
//! rewritten wholesale on every `set`.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// A simple durable key-value store backed by one JSON file.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Create a settings store backed by the given file. The file is only
    /// created on the first `set`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the value stored under `key`, if any.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let document = self.read_document()?;
        match document.get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    /// Store `value` under `key`, creating the file and its parent
    /// directory as needed.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let mut document = self.read_document()?;
        document.insert(key.to_string(), serde_json::to_value(value)?);

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| Error::CreateDirectory {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let content = serde_json::to_string(&document)?;
        std::fs::write(&self.path, content).map_err(|e| Error::WriteFailed {
            path: self.path.clone(),
            source: e,
        })
    }

    fn read_document(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        let value: Value = serde_json::from_str(&content)?;
        match value {
            Value::Object(map) => Ok(map),
            _ => Ok(Map::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let settings = SettingsStore::new(dir.path().join("settings.json"));
        let value: Option<Vec<String>> = settings.get("readings").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_set_then_get_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let settings = SettingsStore::new(dir.path().join("settings.json"));

        settings.set("names", &vec!["a", "b"]).unwrap();
        let names: Option<Vec<String>> = settings.get("names").unwrap();
        assert_eq!(names, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_set_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let settings = SettingsStore::new(dir.path().join("settings.json"));

        settings.set("one", &1u32).unwrap();
        settings.set("two", &2u32).unwrap();

        assert_eq!(settings.get::<u32>("one").unwrap(), Some(1));
        assert_eq!(settings.get::<u32>("two").unwrap(), Some(2));
    }

    #[test]
    fn test_set_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let settings = SettingsStore::new(dir.path().join("nested/deeper/settings.json"));
        settings.set("key", &"value").unwrap();
        assert_eq!(settings.get::<String>("key").unwrap(), Some("value".to_string()));
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let dir = tempfile::tempdir().unwrap();
        let settings = SettingsStore::new(dir.path().join("settings.json"));

        settings.set("key", &"old").unwrap();
        settings.set("key", &"new").unwrap();
        assert_eq!(settings.get::<String>("key").unwrap(), Some("new".to_string()));
    }
}
