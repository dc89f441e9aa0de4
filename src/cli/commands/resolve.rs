//! Resolve command implementation.
//!
//! The `bundle-config resolve` command prints the configuration for the
//! selected environment and mode.

use crate::cli::args::ResolveArgs;
use crate::config::Configuration;
use crate::error::{BundleConfigError, Result};
use crate::ui::{OutputMode, UserInterface};

use super::context::BuildContext;
use super::dispatcher::{Command, CommandResult};

/// The resolve command implementation.
pub struct ResolveCommand {
    context: BuildContext,
    args: ResolveArgs,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(context: BuildContext, args: ResolveArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ResolveArgs {
        &self.args
    }

    fn render(&self, config: &Configuration) -> Result<String> {
        if self.args.json {
            serde_json::to_string_pretty(config).map_err(|e| BundleConfigError::Other(e.into()))
        } else {
            serde_yaml::to_string(config).map_err(|e| BundleConfigError::Other(e.into()))
        }
    }
}

impl Command for ResolveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let resolved = self.context.resolve(ui)?;

        // Verbose mode has already reported the sources.
        if ui.output_mode() == OutputMode::Normal {
            resolved.report(ui);
        }

        let rendered = self.render(&resolved.config)?;
        ui.data(rendered.trim_end());

        Ok(CommandResult::success())
    }
}
