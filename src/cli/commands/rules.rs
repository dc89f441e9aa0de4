//! Rules command implementation.
//!
//! The `bundle-config rules` command lists the asset rules, or reports which
//! rule handles each given path.

use crate::cli::args::RulesArgs;
use crate::error::Result;
use crate::rules::{AssetRule, RuleAction};
use crate::ui::UserInterface;

use super::context::BuildContext;
use super::dispatcher::{Command, CommandResult};

/// The rules command implementation.
pub struct RulesCommand {
    context: BuildContext,
    args: RulesArgs,
}

impl RulesCommand {
    /// Create a new rules command.
    pub fn new(context: BuildContext, args: RulesArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RulesArgs {
        &self.args
    }
}

fn describe(rule: &AssetRule) -> String {
    match &rule.action {
        RuleAction::Transform(chain) => chain
            .iter()
            .map(|step| step.loader.as_str())
            .collect::<Vec<_>>()
            .join(" <- "),
        RuleAction::Resource(output) => format!("copy to {}", output.filename()),
    }
}

impl Command for RulesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let resolved = self.context.resolve(ui)?;
        let rules = resolved.config.rules();

        if self.args.paths.is_empty() {
            for rule in rules {
                ui.data(&format!(
                    "{:<6}  {:<40}  {}",
                    rule.kind,
                    rule.matcher.test.as_str(),
                    describe(rule)
                ));
            }
            return Ok(CommandResult::success());
        }

        let mut unmatched = 0;
        for path in &self.args.paths {
            match rules.first_match(path) {
                Some(rule) => ui.data(&format!("{}: {} ({})", path, rule.kind, describe(rule))),
                None => {
                    unmatched += 1;
                    ui.warning(&format!("{}: no rule matches", path));
                }
            }
        }

        if unmatched > 0 {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
