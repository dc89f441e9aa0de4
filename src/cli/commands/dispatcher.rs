//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, ResolveArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::BuildContext;

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

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    env_var: Option<String>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            env_var: None,
        }
    }

    /// Value of `NODE_ENV` to use when no `--env` flag is given.
    pub fn with_env_var(mut self, value: Option<String>) -> Self {
        self.env_var = value;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    fn context(&self, cli: &Cli) -> BuildContext {
        BuildContext::new(&self.project_root)
            .with_env_flag(cli.env.clone())
            .with_env_var(self.env_var.clone())
            .with_mode_flag(cli.mode.clone())
            .with_strict(cli.strict)
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. Without a subcommand, the configuration is resolved
    /// and printed.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Resolve(args)) => {
                let cmd = super::resolve::ResolveCommand::new(self.context(cli), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Rules(args)) => {
                let cmd = super::rules::RulesCommand::new(self.context(cli), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Preview(args)) => {
                let cmd = super::preview::PreviewCommand::new(self.context(cli), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Manifest(args)) => {
                let cmd = super::manifest::ManifestCommand::new(self.context(cli), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd =
                    super::resolve::ResolveCommand::new(self.context(cli), ResolveArgs::default());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"));
        assert_eq!(dispatcher.project_root(), Path::new("/test"));
    }

    #[test]
    fn no_subcommand_resolves() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::parse_from(["bundle-config"]);
        let mut ui = MockUI::new();

        let result = CommandDispatcher::new(temp.path().to_path_buf())
            .dispatch(&cli, &mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.data_text().contains("environment: dev"));
    }

    #[test]
    fn env_var_reaches_commands() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::parse_from(["bundle-config", "resolve", "--json"]);
        let mut ui = MockUI::new();

        CommandDispatcher::new(temp.path().to_path_buf())
            .with_env_var(Some("stg".into()))
            .dispatch(&cli, &mut ui)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.data_text()).unwrap();
        assert_eq!(value["environment"], "stg");
    }

    #[test]
    fn flag_beats_env_var() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::parse_from(["bundle-config", "--env", "prod", "resolve", "--json"]);
        let mut ui = MockUI::new();

        CommandDispatcher::new(temp.path().to_path_buf())
            .with_env_var(Some("stg".into()))
            .dispatch(&cli, &mut ui)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.data_text()).unwrap();
        assert_eq!(value["environment"], "prod");
    }
}
