//! Cache folder listing command.

use serde::Serialize;

use crate::cli::args::DirsArgs;
use crate::error::Result;
use crate::tools::PAGE_RENDER_CACHE_DIR;
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandEnv, CommandResult};

/// JSON output of `cachectl dirs --json`.
#[derive(Debug, Serialize)]
struct DirsOutput<'a> {
    cache_root: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    cache_root_url: Option<&'a str>,
    directories: Vec<String>,
}

/// The dirs command implementation.
pub struct DirsCommand {
    env: CommandEnv,
    args: DirsArgs,
}

impl DirsCommand {
    /// Create a new dirs command.
    pub fn new(env: CommandEnv, args: DirsArgs) -> Self {
        Self { env, args }
    }
}

impl Command for DirsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = CommandContext::load(&self.env)?;
        let config = ctx.config();
        let directories = ctx.tools().cache_directories()?;

        if self.args.json {
            let output = DirsOutput {
                cache_root: config.cache_root.display().to_string(),
                cache_root_url: config.cache_root_url.as_deref(),
                directories,
            };
            let json = serde_json::to_string_pretty(&output).map_err(anyhow::Error::from)?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        let location = config
            .cache_root_url
            .clone()
            .unwrap_or_else(|| config.cache_root.display().to_string());
        ui.show_header(&format!("Cache folders in {}", location));

        if directories.is_empty() {
            ui.message("No writable cache folders found");
            return Ok(CommandResult::success());
        }

        for dir in &directories {
            if dir == PAGE_RENDER_CACHE_DIR {
                ui.message(&format!("  {} (template render cache)", dir));
            } else {
                ui.message(&format!("  {}", dir));
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn lists_folders_and_marks_render_cache() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("site/assets/cache");
        fs::create_dir_all(root.join("Page")).unwrap();
        fs::create_dir_all(root.join("FileCompiler")).unwrap();
        let mut ui = MockUI::new();

        DirsCommand::new(CommandEnv::new(temp.path()), DirsArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(
            ui.messages(),
            ["  FileCompiler", "  Page (template render cache)"]
        );
    }

    #[test]
    fn json_output_lists_names() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("site/assets/cache/Page")).unwrap();
        let mut ui = MockUI::new();

        DirsCommand::new(CommandEnv::new(temp.path()), DirsArgs { json: true })
            .execute(&mut ui)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["directories"], serde_json::json!(["Page"]));
    }

    #[test]
    fn empty_root_reports_nothing_found() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        DirsCommand::new(CommandEnv::new(temp.path()), DirsArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_message("No writable cache folders found"));
    }
}
