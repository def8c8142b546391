//! Asset version command.
//!
//! Provides `cachectl version get`, `cachectl version refresh` and
//! `cachectl version clear`.

use crate::cli::args::{VersionArgs, VersionSubcommand};
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandEnv, CommandResult};

/// The version command implementation.
pub struct VersionCommand {
    env: CommandEnv,
    args: VersionArgs,
}

impl VersionCommand {
    /// Create a new version command.
    pub fn new(env: CommandEnv, args: VersionArgs) -> Self {
        Self { env, args }
    }
}

impl Command for VersionCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = CommandContext::load(&self.env)?;
        let tools = ctx.tools();

        let result = match &self.args.command {
            VersionSubcommand::Get { category } => tools.get_version(category),
            VersionSubcommand::Refresh { category, token } => {
                tools.refresh_version(category, token.as_deref())
            }
            VersionSubcommand::Clear => tools
                .clear_all_versions()
                .map(|removed| format!("Removed {} asset version(s)", removed)),
        };

        ctx.report(ui);
        ui.message(&result?);
        Ok(CommandResult::success())
    }
}
