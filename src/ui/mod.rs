//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use cachectl::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Cleared the template render cache");
//! assert!(ui.has_success("template render cache"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, Theme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header line.
    fn show_header(&mut self, title: &str);

    /// Show one operation log entry.
    fn show_log_entry(&mut self, timestamp: &str, msg: &str) {
        self.message(&format!("  {} {}", timestamp, msg));
    }
}
