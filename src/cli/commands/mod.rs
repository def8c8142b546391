//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Commands that clear caches load a
//! [`context::CommandContext`] holding the config, the store and the
//! operation log, and show the log entries they produced before returning.

pub mod actions;
pub mod clear;
pub mod context;
pub mod dirs;
pub mod dispatcher;
pub mod version;

pub use dispatcher::{Command, CommandDispatcher, CommandEnv, CommandResult};
