//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for terminal usage
//! - [`MockUI`] for capturing output in tests
//!
//! Command results (the configuration dump, the manifest) go through
//! [`UserInterface::data`] and are printed in every output mode. Status
//! messages respect the [`OutputMode`].
//!
//! # Example
//!
//! ```
//! use bundle_config::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.data("{}");
//! ui.success("Wrote manifest");
//! assert_eq!(ui.data_lines(), ["{}"]);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, Theme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Print command output. Shown in every mode.
    fn data(&mut self, text: &str);

    /// Display a status message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);
}
