//! The default "clear all" action.

use super::{CacheAction, FullPageCache};
use crate::config::ClearAllSettings;
use crate::error::Result;
use crate::tools::CacheTools;

/// Identifier of the "clear all" action.
pub const CLEAR_ALL_ACTION_ID: &str = "clear-all";

/// Runs every cache-clearing step enabled in [`ClearAllSettings`].
///
/// Steps run in a fixed order and are independent of each other: a failing
/// step stops the action, but whatever earlier steps cleared stays cleared.
pub struct ClearAllAction {
    settings: ClearAllSettings,
    full_page_cache: Option<Box<dyn FullPageCache>>,
}

impl ClearAllAction {
    /// Create the action without a full-page cache attached.
    pub fn new(settings: ClearAllSettings) -> Self {
        Self {
            settings,
            full_page_cache: None,
        }
    }

    /// Attach a full-page cache.
    pub fn with_full_page_cache(mut self, cache: impl FullPageCache + 'static) -> Self {
        self.full_page_cache = Some(Box::new(cache));
        self
    }

    /// The settings this action runs with.
    pub fn settings(&self) -> &ClearAllSettings {
        &self.settings
    }
}

impl CacheAction for ClearAllAction {
    fn id(&self) -> &str {
        CLEAR_ALL_ACTION_ID
    }

    fn title(&self) -> &str {
        "Clear all caches"
    }

    fn run(&self, tools: &CacheTools<'_>) -> Result<()> {
        let settings = &self.settings;

        if settings.expire_all {
            tools.expire_all()?;
        }
        if settings.delete_all {
            tools.delete_all()?;
        }
        if !settings.delete_namespaces.is_empty() {
            tools.clear_namespaces(settings.delete_namespaces.as_slice())?;
        }
        for dir in &settings.clear_directories {
            tools.purge_directory(dir)?;
        }
        if settings.clear_asset_versions {
            tools.clear_all_versions()?;
        }
        if settings.clear_full_page_cache {
            match &self.full_page_cache {
                Some(cache) => {
                    cache.clear_all()?;
                    tools.note("Cleared the full-page cache")?;
                }
                None => tracing::debug!("no full-page cache attached, skipping"),
            }
        }

        Ok(())
    }
}
