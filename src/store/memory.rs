//! In-process key/value store.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use super::entry::{Expiry, StoredValue};
use super::KeyValueStore;
use crate::error::Result;

type Namespaces = BTreeMap<String, BTreeMap<String, StoredValue>>;

/// Key/value store held in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    namespaces: Mutex<Namespaces>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Namespaces> {
        self.namespaces
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Number of live entries in a namespace.
    pub fn len_for(&self, namespace: &str) -> usize {
        self.lock()
            .get(namespace)
            .map(|entries| entries.values().filter(|v| !v.is_expired()).count())
            .unwrap_or(0)
    }

    fn retain(&self, keep: impl Fn(&StoredValue) -> bool) -> usize {
        let mut namespaces = self.lock();
        let mut removed = 0;
        for entries in namespaces.values_mut() {
            let before = entries.len();
            entries.retain(|_, v| keep(v));
            removed += before - entries.len();
        }
        namespaces.retain(|_, entries| !entries.is_empty());
        removed
    }
}

impl KeyValueStore for MemoryStore {
    fn get_for(&self, namespace: &str, key: &str) -> Result<Option<String>> {
        let namespaces = self.lock();
        Ok(namespaces
            .get(namespace)
            .and_then(|entries| entries.get(key))
            .filter(|v| !v.is_expired())
            .map(|v| v.value.clone()))
    }

    fn save_for(&self, namespace: &str, key: &str, value: &str, expiry: Expiry) -> Result<()> {
        self.lock()
            .entry(namespace.to_string())
            .or_default()
            .insert(key.to_string(), StoredValue::new(value, expiry));
        Ok(())
    }

    fn delete_for(&self, namespace: &str, key: Option<&str>) -> Result<usize> {
        let mut namespaces = self.lock();
        let removed = match key {
            None => namespaces.remove(namespace).map(|e| e.len()).unwrap_or(0),
            Some(key) => match namespaces.get_mut(namespace) {
                Some(entries) => usize::from(entries.remove(key).is_some()),
                None => 0,
            },
        };
        namespaces.retain(|_, entries| !entries.is_empty());
        Ok(removed)
    }

    fn expire_all(&self) -> Result<usize> {
        Ok(self.retain(|v| !v.expiry.has_date()))
    }

    fn delete_all(&self) -> Result<usize> {
        Ok(self.retain(StoredValue::is_reserved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_get() {
        let store = MemoryStore::new();
        store.save_for("ns", "k", "v", Expiry::Never).unwrap();
        assert_eq!(store.get_for("ns", "k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn get_missing_returns_none() {
        let store = MemoryStore::new();
        assert!(store.get_for("ns", "missing").unwrap().is_none());
    }

    #[test]
    fn expired_value_reads_as_none() {
        let store = MemoryStore::new();
        store
            .save_for("ns", "k", "v", Expiry::after_seconds(0))
            .unwrap();
        assert!(store.get_for("ns", "k").unwrap().is_none());
    }

    #[test]
    fn delete_single_key() {
        let store = MemoryStore::new();
        store.save_for("ns", "a", "1", Expiry::Never).unwrap();
        store.save_for("ns", "b", "2", Expiry::Never).unwrap();

        assert_eq!(store.delete_for("ns", Some("a")).unwrap(), 1);
        assert!(store.get_for("ns", "a").unwrap().is_none());
        assert!(store.get_for("ns", "b").unwrap().is_some());
    }

    #[test]
    fn delete_whole_namespace() {
        let store = MemoryStore::new();
        store.save_for("ns", "a", "1", Expiry::Never).unwrap();
        store.save_for("ns", "b", "2", Expiry::Never).unwrap();
        store.save_for("other", "c", "3", Expiry::Never).unwrap();

        assert_eq!(store.delete_for("ns", None).unwrap(), 2);
        assert_eq!(store.len_for("ns"), 0);
        assert_eq!(store.len_for("other"), 1);
    }

    #[test]
    fn delete_missing_namespace_is_noop() {
        let store = MemoryStore::new();
        assert_eq!(store.delete_for("nothing-here", None).unwrap(), 0);
    }

    #[test]
    fn expire_all_keeps_undated_entries() {
        let store = MemoryStore::new();
        store
            .save_for("ns", "dated", "1", Expiry::after_seconds(3600))
            .unwrap();
        store.save_for("ns", "never", "2", Expiry::Never).unwrap();
        store.save_for("ns", "reserved", "3", Expiry::Reserved).unwrap();

        assert_eq!(store.expire_all().unwrap(), 1);
        assert!(store.get_for("ns", "dated").unwrap().is_none());
        assert!(store.get_for("ns", "never").unwrap().is_some());
        assert!(store.get_for("ns", "reserved").unwrap().is_some());
    }

    #[test]
    fn delete_all_keeps_reserved_entries() {
        let store = MemoryStore::new();
        store.save_for("a", "never", "1", Expiry::Never).unwrap();
        store
            .save_for("b", "dated", "2", Expiry::after_seconds(60))
            .unwrap();
        store.save_for("c", "reserved", "3", Expiry::Reserved).unwrap();

        assert_eq!(store.delete_all().unwrap(), 2);
        assert_eq!(store.get_for("c", "reserved").unwrap(), Some("3".into()));
    }
}
