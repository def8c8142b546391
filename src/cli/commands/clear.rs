//! Cache-clearing commands.
//!
//! Provides `cachectl clear-all`, `cachectl purge` and `cachectl namespaces`.

use crate::actions::{ActionRegistry, CLEAR_ALL_ACTION_ID};
use crate::cli::args::{NamespacesArgs, PurgeArgs};
use crate::config::normalize_namespaces;
use crate::error::Result;
use crate::tools::PurgeOutcome;
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandEnv, CommandResult};

/// The clear-all command implementation.
pub struct ClearAllCommand {
    env: CommandEnv,
}

impl ClearAllCommand {
    /// Create a new clear-all command.
    pub fn new(env: CommandEnv) -> Self {
        Self { env }
    }
}

impl Command for ClearAllCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = CommandContext::load(&self.env)?;
        let registry = ActionRegistry::with_defaults(ctx.config().clear_all.clone());

        let result = registry.run(CLEAR_ALL_ACTION_ID, &ctx.tools());
        ctx.report(ui);
        result?;

        ui.success("All configured caches cleared");
        Ok(CommandResult::success())
    }
}

/// The purge command implementation.
pub struct PurgeCommand {
    env: CommandEnv,
    args: PurgeArgs,
}

impl PurgeCommand {
    /// Create a new purge command.
    pub fn new(env: CommandEnv, args: PurgeArgs) -> Self {
        Self { env, args }
    }
}

impl Command for PurgeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = CommandContext::load(&self.env)?;
        let tools = ctx.tools();

        let mut result = Ok(());
        for dir in &self.args.directories {
            match tools.purge_directory(dir) {
                Ok(PurgeOutcome::Cleared { removed }) => {
                    ui.success(&format!("Cleared {} ({} entries removed)", dir, removed));
                }
                Ok(PurgeOutcome::Skipped) => {
                    ui.warning(&format!("Skipped {} (folder does not exist)", dir));
                }
                Err(e) => {
                    result = Err(e);
                    break;
                }
            }
        }

        ctx.report(ui);
        result?;
        Ok(CommandResult::success())
    }
}

/// The namespaces command implementation.
pub struct NamespacesCommand {
    env: CommandEnv,
    args: NamespacesArgs,
}

impl NamespacesCommand {
    /// Create a new namespaces command.
    pub fn new(env: CommandEnv, args: NamespacesArgs) -> Self {
        Self { env, args }
    }
}

impl Command for NamespacesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = CommandContext::load(&self.env)?;
        let namespaces = normalize_namespaces(&self.args.namespaces);

        let result = ctx.tools().clear_namespaces(namespaces.as_slice());
        ctx.report(ui);
        let cleared = result?;

        ui.success(&format!("Cleared {} namespace(s)", cleared.len()));
        Ok(CommandResult::success())
    }
}
