//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cachectl - Clear site caches.
#[derive(Debug, Parser)]
#[command(name = "cachectl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .cachectl/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Cache root directory (overrides the configured one)
    #[arg(long, global = true, env = "CACHECTL_CACHE_ROOT")]
    pub cache_root: Option<PathBuf>,

    /// Don't write routine entries to the operation log
    #[arg(short, long, global = true)]
    pub silent: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the configured "clear all" action
    ClearAll,

    /// Remove the contents of cache folders
    Purge(PurgeArgs),

    /// Delete all cache entries in namespaces
    Namespaces(NamespacesArgs),

    /// Show, refresh or clear asset versions
    Version(VersionArgs),

    /// List writable cache folders
    Dirs(DirsArgs),

    /// List available actions
    Actions,

    /// Run an action by id
    Run(RunArgs),
}

/// Arguments for the `purge` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PurgeArgs {
    /// Folder names directly under the cache root
    #[arg(required = true)]
    pub directories: Vec<String>,
}

/// Arguments for the `namespaces` command.
#[derive(Debug, Clone, clap::Args)]
pub struct NamespacesArgs {
    /// Namespaces to clear, in order
    #[arg(required = true)]
    pub namespaces: Vec<String>,
}

/// Arguments for the `version` command.
#[derive(Debug, Clone, clap::Args)]
pub struct VersionArgs {
    #[command(subcommand)]
    pub command: VersionSubcommand,
}

/// Asset version subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum VersionSubcommand {
    /// Print the version token, creating it if needed
    Get {
        /// Asset category
        #[arg(default_value = "default")]
        category: String,
    },
    /// Replace the version token
    Refresh {
        /// Asset category
        #[arg(default_value = "default")]
        category: String,
        /// Use this token instead of a generated one
        #[arg(long)]
        token: Option<String>,
    },
    /// Delete every stored version token
    Clear,
}

/// Arguments for the `dirs` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DirsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RunArgs {
    /// Action id (see `cachectl actions`)
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_purge_directories() {
        let cli = Cli::parse_from(["cachectl", "purge", "Page", "FileCompiler"]);
        match cli.command {
            Commands::Purge(args) => assert_eq!(args.directories, vec!["Page", "FileCompiler"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn version_get_defaults_category() {
        let cli = Cli::parse_from(["cachectl", "version", "get"]);
        match cli.command {
            Commands::Version(VersionArgs {
                command: VersionSubcommand::Get { category },
            }) => assert_eq!(category, "default"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["cachectl", "clear-all", "--silent", "--quiet"]);
        assert!(cli.silent);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::ClearAll));
    }

    #[test]
    fn purge_requires_directory() {
        assert!(Cli::try_parse_from(["cachectl", "purge"]).is_err());
    }

    #[test]
    fn refresh_accepts_token() {
        let cli = Cli::parse_from(["cachectl", "version", "refresh", "css", "--token", "v2"]);
        match cli.command {
            Commands::Version(VersionArgs {
                command: VersionSubcommand::Refresh { category, token },
            }) => {
                assert_eq!(category, "css");
                assert_eq!(token.as_deref(), Some("v2"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
