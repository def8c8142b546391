//! cachectl - Clear site caches.
//!
//! Clears the caches of a site installation: namespaced key/value cache
//! entries, folders under the cache root such as the template render cache,
//! and the asset version tokens used to bust browser caches for static
//! files. Every collaborator is passed in explicitly.
//!
//! # Modules
//!
//! - [`actions`] - Named actions such as the configurable "clear all"
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`oplog`] - Operation log shown to the operator after each action
//! - [`store`] - Namespaced key/value stores
//! - [`tools`] - Asset versions, folder purges and namespace invalidation
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use cachectl::oplog::{MemorySink, OperationLog};
//! use cachectl::store::MemoryStore;
//! use cachectl::tools::{CacheTools, PurgeOutcome};
//! use tempfile::TempDir;
//!
//! let root = TempDir::new().unwrap();
//! let store = MemoryStore::new();
//! let log = OperationLog::new(MemorySink::new());
//! let tools = CacheTools::new(&store, root.path(), &log);
//!
//! assert_eq!(tools.purge_directory("Page").unwrap(), PurgeOutcome::Skipped);
//! ```

pub mod actions;
pub mod cli;
pub mod config;
pub mod error;
pub mod oplog;
pub mod store;
pub mod tools;
pub mod ui;

pub use error::{CacheControlError, Result};
