//! Cache-clearing operations.
//!
//! [`CacheTools`] bundles the collaborators every operation needs (the
//! key/value store, the cache root directory, the operation log and the
//! token source for asset versions) and exposes:
//!
//! - asset versions in [`versions`]
//! - scoped directory purges in [`purge`]
//! - namespace invalidation in [`namespaces`]
//!
//! Verbosity is part of the value: [`CacheTools::silent`] returns a copy
//! that suppresses routine log entries, leaving the original untouched.
//!
//! # Example
//!
//! ```
//! use cachectl::oplog::{MemorySink, OperationLog};
//! use cachectl::store::MemoryStore;
//! use cachectl::tools::CacheTools;
//! use tempfile::TempDir;
//!
//! let root = TempDir::new().unwrap();
//! let store = MemoryStore::new();
//! let log = OperationLog::new(MemorySink::new());
//! let tools = CacheTools::new(&store, root.path(), &log);
//!
//! let token = tools.get_version("css").unwrap();
//! assert_eq!(tools.get_version("css").unwrap(), token);
//! ```

pub mod namespaces;
pub mod purge;
pub mod versions;

pub use purge::{list_cache_directories, purge_directory, PurgeOutcome, PAGE_RENDER_CACHE_DIR};
pub use versions::{ClockTokenSource, TokenSource, ASSET_VERSION_NAMESPACE, DEFAULT_CATEGORY};

use std::path::Path;

use crate::oplog::{OperationLog, Verbosity};
use crate::store::KeyValueStore;

static CLOCK: ClockTokenSource = ClockTokenSource;

/// Cache-clearing operations over injected collaborators.
#[derive(Clone, Copy)]
pub struct CacheTools<'a> {
    store: &'a dyn KeyValueStore,
    cache_root: &'a Path,
    log: &'a OperationLog,
    tokens: &'a dyn TokenSource,
    verbosity: Verbosity,
}

impl<'a> CacheTools<'a> {
    /// Create verbose tools using the clock as token source.
    pub fn new(store: &'a dyn KeyValueStore, cache_root: &'a Path, log: &'a OperationLog) -> Self {
        Self {
            store,
            cache_root,
            log,
            tokens: &CLOCK,
            verbosity: Verbosity::Verbose,
        }
    }

    /// Use a different token source for asset versions.
    pub fn with_token_source(self, tokens: &'a dyn TokenSource) -> Self {
        Self { tokens, ..self }
    }

    /// Use the given verbosity.
    pub fn with_verbosity(self, verbosity: Verbosity) -> Self {
        Self { verbosity, ..self }
    }

    /// A copy that suppresses routine log entries.
    pub fn silent(&self) -> Self {
        self.with_verbosity(Verbosity::Silent)
    }

    /// A copy that logs every completed action.
    pub fn verbose(&self) -> Self {
        self.with_verbosity(Verbosity::Verbose)
    }

    /// Current verbosity.
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// The key/value store.
    pub fn store(&self) -> &'a dyn KeyValueStore {
        self.store
    }

    /// The cache root directory.
    pub fn cache_root(&self) -> &'a Path {
        self.cache_root
    }

    /// The operation log.
    pub fn log(&self) -> &'a OperationLog {
        self.log
    }

    /// Log a routine message, honoring verbosity.
    pub(crate) fn note(&self, message: impl Into<String>) -> crate::Result<()> {
        self.log.log_message_if_not_silent(self.verbosity, message)
    }
}
