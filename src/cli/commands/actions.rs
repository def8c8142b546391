//! Action listing and execution commands.

use crate::actions::ActionRegistry;
use crate::cli::args::RunArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandEnv, CommandResult};

fn registry(ctx: &CommandContext) -> ActionRegistry {
    ActionRegistry::with_defaults(ctx.config().clear_all.clone())
}

/// The actions command implementation.
pub struct ActionsCommand {
    env: CommandEnv,
}

impl ActionsCommand {
    /// Create a new actions command.
    pub fn new(env: CommandEnv) -> Self {
        Self { env }
    }
}

impl Command for ActionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = CommandContext::load(&self.env)?;

        ui.show_header("Available actions");
        for action in registry(&ctx).list() {
            ui.message(&format!("  {:<12} {}", action.id(), action.title()));
        }

        Ok(CommandResult::success())
    }
}

/// The run command implementation.
pub struct RunCommand {
    env: CommandEnv,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(env: CommandEnv, args: RunArgs) -> Self {
        Self { env, args }
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = CommandContext::load(&self.env)?;

        let result = registry(&ctx).run(&self.args.id, &ctx.tools());
        ctx.report(ui);
        result?;

        ui.success(&format!("Action '{}' completed", self.args.id));
        Ok(CommandResult::success())
    }
}
