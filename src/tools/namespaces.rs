//! Bulk invalidation of key/value cache entries.

use super::CacheTools;
use crate::error::Result;

impl CacheTools<'_> {
    /// Delete every entry in each of `namespaces`, in order.
    ///
    /// A failing namespace does not stop the others. Namespaces that were
    /// cleared are logged in a single entry; the first failure, if any, is
    /// returned afterwards.
    pub fn clear_namespaces<S: AsRef<str>>(&self, namespaces: &[S]) -> Result<Vec<String>> {
        let mut cleared = Vec::with_capacity(namespaces.len());
        let mut first_error = None;

        for namespace in namespaces {
            let namespace = namespace.as_ref();
            match self.store.delete_for(namespace, None) {
                Ok(removed) => {
                    tracing::debug!("deleted {} entries in namespace {}", removed, namespace);
                    cleared.push(namespace.to_string());
                }
                Err(e) => {
                    tracing::warn!("Failed to clear namespace {}: {}", namespace, e);
                    first_error.get_or_insert(e);
                }
            }
        }

        if !cleared.is_empty() {
            self.note(format!(
                "Deleted cache entries in namespaces: {}",
                cleared.join(", ")
            ))?;
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(cleared),
        }
    }

    /// Delete every key/value entry that has an expiration date.
    pub fn expire_all(&self) -> Result<usize> {
        let removed = self.store.expire_all()?;
        self.note(format!(
            "Expired {} cache entries with an expiration date",
            removed
        ))?;
        Ok(removed)
    }

    /// Delete every key/value entry except reserved ones.
    pub fn delete_all(&self) -> Result<usize> {
        let removed = self.store.delete_all()?;
        self.note(format!(
            "Deleted {} cache entries (reserved entries kept)",
            removed
        ))?;
        Ok(removed)
    }
}
