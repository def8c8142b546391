//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandEnv`] for settings shared by every command
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::oplog::Verbosity;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Settings taken from global CLI flags.
#[derive(Debug, Clone)]
pub struct CommandEnv {
    /// Project root that relative config paths resolve against.
    pub project_root: PathBuf,
    /// Explicit config file.
    pub config_path: Option<PathBuf>,
    /// Cache root overriding the configured one.
    pub cache_root: Option<PathBuf>,
    /// Whether routine log entries are written.
    pub verbosity: Verbosity,
}

impl CommandEnv {
    /// Create an environment with defaults for everything but the root.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            config_path: None,
            cache_root: None,
            verbosity: Verbosity::Verbose,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    env: CommandEnv,
}

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new(env: CommandEnv) -> Self {
        Self { env }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.env.project_root
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::ClearAll => {
                let cmd = super::clear::ClearAllCommand::new(self.env.clone());
                cmd.execute(ui)
            }
            Commands::Purge(args) => {
                let cmd = super::clear::PurgeCommand::new(self.env.clone(), args.clone());
                cmd.execute(ui)
            }
            Commands::Namespaces(args) => {
                let cmd = super::clear::NamespacesCommand::new(self.env.clone(), args.clone());
                cmd.execute(ui)
            }
            Commands::Version(args) => {
                let cmd = super::version::VersionCommand::new(self.env.clone(), args.clone());
                cmd.execute(ui)
            }
            Commands::Dirs(args) => {
                let cmd = super::dirs::DirsCommand::new(self.env.clone(), args.clone());
                cmd.execute(ui)
            }
            Commands::Actions => {
                let cmd = super::actions::ActionsCommand::new(self.env.clone());
                cmd.execute(ui)
            }
            Commands::Run(args) => {
                let cmd = super::actions::RunCommand::new(self.env.clone(), args.clone());
                cmd.execute(ui)
            }
        }
    }
}
