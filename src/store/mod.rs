//! Namespaced key/value cache storage.
//!
//! The [`KeyValueStore`] trait is the seam between cache-control operations
//! and whatever actually holds the cached entries. Two implementations ship
//! with the crate:
//!
//! - [`MemoryStore`] keeps everything in process, guarded by a mutex
//! - [`FileStore`] keeps one JSON document per namespace on disk
//!
//! # Example
//!
//! ```
//! use cachectl::store::{Expiry, KeyValueStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.save_for("site-search", "q:rust", "[1,2,3]", Expiry::Never).unwrap();
//! assert_eq!(
//!     store.get_for("site-search", "q:rust").unwrap().as_deref(),
//!     Some("[1,2,3]")
//! );
//! assert_eq!(store.delete_for("site-search", None).unwrap(), 1);
//! ```

pub mod entry;
pub mod file;
pub mod memory;

pub use entry::{Expiry, StoredValue};
pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Namespaced get/set/delete over cached string values.
///
/// Implementations are shared black boxes: they must be safe to call from
/// several threads and perform their own synchronization.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. Expired values read as `None`.
    fn get_for(&self, namespace: &str, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any existing one.
    fn save_for(&self, namespace: &str, key: &str, value: &str, expiry: Expiry) -> Result<()>;

    /// Delete one key, or every key in the namespace when `key` is `None`.
    ///
    /// Returns the number of entries removed. A missing namespace removes nothing.
    fn delete_for(&self, namespace: &str, key: Option<&str>) -> Result<usize>;

    /// Delete every entry that carries an expiration date.
    fn expire_all(&self) -> Result<usize>;

    /// Delete every entry except reserved ones.
    fn delete_all(&self) -> Result<usize>;
}
