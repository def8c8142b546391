//! cachectl CLI entry point.

use std::process::ExitCode;

use cachectl::cli::{Cli, CommandDispatcher, CommandEnv};
use cachectl::oplog::Verbosity;
use cachectl::ui::{OutputMode, TerminalUI, UserInterface};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, so operation log entries are not printed twice
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("cachectl=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cachectl=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("cachectl starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let env = CommandEnv {
        project_root,
        config_path: cli.config.clone(),
        cache_root: cli.cache_root.clone(),
        verbosity: if cli.silent {
            Verbosity::Silent
        } else {
            Verbosity::Verbose
        },
    };

    let mut ui = TerminalUI::new(output_mode);
    let dispatcher = CommandDispatcher::new(env);

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
