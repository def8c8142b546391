//! Named cache-control actions.
//!
//! An action is a named sequence of cache-clearing steps. The registry ships
//! with the configurable [`ClearAllAction`]; embedders can register their
//! own actions next to it.
//!
//! # Example
//!
//! ```
//! use cachectl::actions::{ActionRegistry, CacheAction};
//! use cachectl::config::ClearAllSettings;
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
//! let registry = ActionRegistry::with_defaults(ClearAllSettings::default());
//! registry.run("clear-all", &tools).unwrap();
//! assert!(!log.new_messages().is_empty());
//! ```

pub mod clear_all;

pub use clear_all::{ClearAllAction, CLEAR_ALL_ACTION_ID};

use crate::config::ClearAllSettings;
use crate::error::{CacheControlError, Result};
use crate::tools::CacheTools;

/// A named cache-control action.
pub trait CacheAction {
    /// Stable identifier used to invoke the action.
    fn id(&self) -> &str;

    /// Human-readable title.
    fn title(&self) -> &str;

    /// Run the action.
    fn run(&self, tools: &CacheTools<'_>) -> Result<()>;
}

/// A third-party full-page cache that can be flushed as a whole.
pub trait FullPageCache {
    /// Clear every cached page.
    fn clear_all(&self) -> Result<()>;
}

/// Ordered collection of actions.
#[derive(Default)]
pub struct ActionRegistry {
    actions: Vec<Box<dyn CacheAction>>,
}

impl ActionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the "clear all" action.
    pub fn with_defaults(settings: ClearAllSettings) -> Self {
        let mut registry = Self::new();
        registry.register(ClearAllAction::new(settings));
        registry
    }

    /// Register an action, replacing any action with the same id.
    pub fn register(&mut self, action: impl CacheAction + 'static) {
        self.actions.retain(|a| a.id() != action.id());
        self.actions.push(Box::new(action));
    }

    /// Look up an action by id.
    pub fn get(&self, id: &str) -> Option<&dyn CacheAction> {
        self.actions
            .iter()
            .find(|a| a.id() == id)
            .map(|a| a.as_ref())
    }

    /// All actions in registration order.
    pub fn list(&self) -> impl Iterator<Item = &dyn CacheAction> {
        self.actions.iter().map(|a| a.as_ref())
    }

    /// Run the action registered under `id`.
    pub fn run(&self, id: &str, tools: &CacheTools<'_>) -> Result<()> {
        let action = self
            .get(id)
            .ok_or_else(|| CacheControlError::UnknownAction { id: id.to_string() })?;
        tracing::debug!("running action {}", action.id());
        action.run(tools)
    }
}
