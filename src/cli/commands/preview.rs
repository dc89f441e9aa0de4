//! Preview command implementation.
//!
//! The `bundle-config preview` command shows the filenames entries will be
//! emitted under, hashing each entry file where the active templates ask
//! for it.

use std::fs;

use anyhow::Context;

use crate::cli::args::PreviewArgs;
use crate::error::{BundleConfigError, Result};
use crate::manifest::ChunkSpec;
use crate::ui::UserInterface;

use super::context::BuildContext;
use super::dispatcher::{Command, CommandResult};

/// Entry name used when no `--entry` is given.
pub const DEFAULT_ENTRY_NAME: &str = "main";

/// The preview command implementation.
pub struct PreviewCommand {
    context: BuildContext,
    args: PreviewArgs,
}

impl PreviewCommand {
    /// Create a new preview command.
    pub fn new(context: BuildContext, args: PreviewArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &PreviewArgs {
        &self.args
    }
}

impl Command for PreviewCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let resolved = self.context.resolve(ui)?;
        let config = &resolved.config;

        let entries = if self.args.entries.is_empty() {
            vec![ChunkSpec {
                name: DEFAULT_ENTRY_NAME.to_string(),
                files: vec![config.entry.clone()],
            }]
        } else {
            self.args.entries.clone()
        };

        for entry in &entries {
            let [file] = entry.files.as_slice() else {
                return Err(BundleConfigError::InvalidChunk {
                    chunk: entry.name.clone(),
                    message: "expected exactly one entry file".to_string(),
                });
            };

            let path = self.context.project_root().join(file);
            let content = fs::read(&path)
                .with_context(|| format!("Failed to read entry file {}", path.display()))?;
            let outputs = config.entry_outputs(&entry.name, &content);

            ui.data(&format!("{}:", entry.name));
            ui.data(&format!("  script: {}", outputs.script));
            ui.data(&format!("  style:  {}", outputs.style));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::content_hash;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("index.js"), "console.log('hi');\n").unwrap();
        temp
    }

    fn run(context: BuildContext, entries: Vec<ChunkSpec>) -> Result<MockUI> {
        let mut ui = MockUI::new();
        PreviewCommand::new(context, PreviewArgs { entries }).execute(&mut ui)?;
        Ok(ui)
    }

    #[test]
    fn development_names_are_plain() {
        let temp = project();
        let ui = run(BuildContext::new(temp.path()), vec![]).unwrap();

        assert_eq!(ui.data_lines(), ["main:", "  script: main.js", "  style:  main.css"]);
    }

    #[test]
    fn production_names_carry_content_hash() {
        let temp = project();
        let context = BuildContext::new(temp.path()).with_mode_flag(Some("production".into()));
        let ui = run(context, vec![]).unwrap();

        let hash = content_hash(b"console.log('hi');\n");
        assert_eq!(
            ui.data_lines()[1],
            format!("  script: {}/main.js", &hash[..20])
        );
        assert_eq!(ui.data_lines()[2], format!("  style:  {}/main.css", &hash[..20]));
    }

    #[test]
    fn uses_configured_entry() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src")).unwrap();
        fs::write(temp.path().join("src/app.js"), "").unwrap();
        fs::write(temp.path().join("bundle-config.yml"), "entry: src/app.js\n").unwrap();

        let ui = run(BuildContext::new(temp.path()), vec![]).unwrap();
        assert_eq!(ui.data_lines()[0], "main:");
    }

    #[test]
    fn named_entries_are_rendered() {
        let temp = project();
        let entry: ChunkSpec = "admin=index.js".parse().unwrap();
        let ui = run(BuildContext::new(temp.path()), vec![entry]).unwrap();

        assert_eq!(ui.data_lines()[0], "admin:");
        assert_eq!(ui.data_lines()[1], "  script: admin.js");
    }

    #[test]
    fn missing_entry_file_is_error() {
        let temp = TempDir::new().unwrap();
        let err = run(BuildContext::new(temp.path()), vec![]).unwrap_err();
        assert!(err.to_string().contains("index.js"));
    }

    #[test]
    fn multiple_files_per_entry_rejected() {
        let temp = project();
        let entry: ChunkSpec = "main=index.js,other.js".parse().unwrap();
        let err = run(BuildContext::new(temp.path()), vec![entry]).unwrap_err();
        assert!(matches!(err, BundleConfigError::InvalidChunk { .. }));
    }
}
