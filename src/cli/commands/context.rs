//! Collaborators shared by the cache-clearing commands.

use crate::config::{load_config, CacheControlConfig};
use crate::error::Result;
use crate::oplog::{FileLogSink, OperationLog};
use crate::store::FileStore;
use crate::tools::CacheTools;
use crate::ui::UserInterface;

use super::dispatcher::CommandEnv;

/// Config, store and operation log for one CLI invocation.
pub struct CommandContext {
    config: CacheControlConfig,
    store: FileStore,
    log: OperationLog,
    env: CommandEnv,
}

impl CommandContext {
    /// Load the configuration and open the store and log it names.
    pub fn load(env: &CommandEnv) -> Result<Self> {
        let mut config = load_config(&env.project_root, env.config_path.as_deref())?;
        if let Some(root) = &env.cache_root {
            config.cache_root = env.project_root.join(root);
        }
        tracing::debug!("cache root: {:?}", config.cache_root);

        let store = FileStore::new(&config.store_path);
        let log = OperationLog::new(FileLogSink::new(&config.log_path))
            .with_name(config.log_name.clone());

        Ok(Self {
            config,
            store,
            log,
            env: env.clone(),
        })
    }

    /// The resolved configuration.
    pub fn config(&self) -> &CacheControlConfig {
        &self.config
    }

    /// Tools bound to this context, with the invocation's verbosity.
    pub fn tools(&self) -> CacheTools<'_> {
        CacheTools::new(&self.store, &self.config.cache_root, &self.log)
            .with_verbosity(self.env.verbosity)
    }

    /// Show the log entries written during this invocation.
    pub fn report(&self, ui: &mut dyn UserInterface) {
        for entry in self.log.new_messages() {
            let timestamp = entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string();
            ui.show_log_entry(&timestamp, &entry.message);
        }
    }
}
