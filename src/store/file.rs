//! Disk-backed key/value store.
//!
//! Each namespace lives in its own JSON document under the store root. The
//! file name is a digest of the namespace so arbitrary namespace strings
//! never reach the filesystem as path components.

use anyhow::{Context, Result as AnyResult};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::entry::{Expiry, StoredValue};
use super::KeyValueStore;
use crate::error::{CacheControlError, Result};

/// On-disk layout of one namespace.
#[derive(Debug, Default, Serialize, Deserialize)]
struct NamespaceFile {
    namespace: String,
    #[serde(default)]
    entries: BTreeMap<String, StoredValue>,
}

/// Key/value store persisted as JSON files.
pub struct FileStore {
    /// Root directory for namespace files.
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the store root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> AnyResult<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create store directory {:?}", self.root))
    }

    /// Get the file path holding a namespace.
    pub fn namespace_path(&self, namespace: &str) -> PathBuf {
        let hash = Sha256::digest(namespace.as_bytes());
        let hash_str = hex::encode(&hash[..16]);
        self.root.join(hash_str).with_extension("json")
    }

    fn read_file(path: &Path) -> AnyResult<Option<NamespaceFile>> {
        if !path.exists() {
            return Ok(None);
        }
        let json =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let file = serde_json::from_str(&json)
            .with_context(|| format!("Corrupt namespace file {:?}", path))?;
        Ok(Some(file))
    }

    fn write_file(&self, path: &Path, file: &NamespaceFile) -> AnyResult<()> {
        if file.entries.is_empty() {
            if path.exists() {
                fs::remove_file(path).with_context(|| format!("Failed to remove {:?}", path))?;
            }
            return Ok(());
        }
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(file)?;
        fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))
    }

    fn load(&self, namespace: &str) -> AnyResult<NamespaceFile> {
        Ok(Self::read_file(&self.namespace_path(namespace))?.unwrap_or_else(|| {
            NamespaceFile {
                namespace: namespace.to_string(),
                entries: BTreeMap::new(),
            }
        }))
    }

    /// Paths of every namespace file under the root.
    fn namespace_files(&self) -> AnyResult<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }
        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().is_some_and(|e| e == "json") {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    fn retain_everywhere(&self, keep: impl Fn(&StoredValue) -> bool) -> AnyResult<usize> {
        let mut removed = 0;
        for path in self.namespace_files()? {
            let Some(mut file) = Self::read_file(&path)? else {
                continue;
            };
            let before = file.entries.len();
            file.entries.retain(|_, v| keep(v));
            if file.entries.len() != before {
                removed += before - file.entries.len();
                self.write_file(&path, &file)?;
            }
        }
        Ok(removed)
    }
}

fn store_error(namespace: &str, err: anyhow::Error) -> CacheControlError {
    CacheControlError::Store {
        namespace: namespace.to_string(),
        message: format!("{:#}", err),
    }
}

impl KeyValueStore for FileStore {
    fn get_for(&self, namespace: &str, key: &str) -> Result<Option<String>> {
        let file = self.load(namespace).map_err(|e| store_error(namespace, e))?;
        Ok(file
            .entries
            .get(key)
            .filter(|v| !v.is_expired())
            .map(|v| v.value.clone()))
    }

    fn save_for(&self, namespace: &str, key: &str, value: &str, expiry: Expiry) -> Result<()> {
        let mut file = self.load(namespace).map_err(|e| store_error(namespace, e))?;
        file.entries
            .insert(key.to_string(), StoredValue::new(value, expiry));
        self.write_file(&self.namespace_path(namespace), &file)
            .map_err(|e| store_error(namespace, e))
    }

    fn delete_for(&self, namespace: &str, key: Option<&str>) -> Result<usize> {
        let path = self.namespace_path(namespace);
        let Some(mut file) = Self::read_file(&path).map_err(|e| store_error(namespace, e))? else {
            return Ok(0);
        };
        let removed = match key {
            None => {
                let count = file.entries.len();
                file.entries.clear();
                count
            }
            Some(key) => usize::from(file.entries.remove(key).is_some()),
        };
        self.write_file(&path, &file)
            .map_err(|e| store_error(namespace, e))?;
        Ok(removed)
    }

    fn expire_all(&self) -> Result<usize> {
        self.retain_everywhere(|v| !v.expiry.has_date())
            .map_err(|e| store_error("*", e))
    }

    fn delete_all(&self) -> Result<usize> {
        self.retain_everywhere(StoredValue::is_reserved)
            .map_err(|e| store_error("*", e))
    }
}
