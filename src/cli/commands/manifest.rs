//! Manifest command implementation.
//!
//! The `bundle-config manifest` command records which files each entry was
//! emitted as, in `webpack-bundle.<env>.json` under the bundles directory.

use crate::cli::args::ManifestArgs;
use crate::error::Result;
use crate::manifest::ManifestWriter;
use crate::ui::UserInterface;

use super::context::BuildContext;
use super::dispatcher::{Command, CommandResult};

/// The manifest command implementation.
pub struct ManifestCommand {
    context: BuildContext,
    args: ManifestArgs,
}

impl ManifestCommand {
    /// Create a new manifest command.
    pub fn new(context: BuildContext, args: ManifestArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ManifestArgs {
        &self.args
    }
}

impl Command for ManifestCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let resolved = self.context.resolve(ui)?;
        let config = &resolved.config;
        let record = config.manifest_record(self.args.chunks.iter().cloned())?;

        for asset in record.assets.values() {
            if !asset.path.is_file() {
                ui.warning(&format!(
                    "{} not found in {}",
                    asset.name,
                    config.output_directory().display()
                ));
            }
        }

        let writer = ManifestWriter::new();
        if self.args.dry_run {
            ui.data(&writer.render(&record)?);
            return Ok(CommandResult::success());
        }

        let path = writer.write(&config.manifest, &record)?;
        ui.success(&format!(
            "Wrote {} ({} entries)",
            path.display(),
            record.chunks.len()
        ));

        Ok(CommandResult::success())
    }
}
