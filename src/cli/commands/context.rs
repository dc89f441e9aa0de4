//! Shared selector handling for commands.
//!
//! Every command that needs a [`Configuration`] goes through
//! [`BuildContext::resolve`], so settings loading, validation and selector
//! resolution behave the same everywhere.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{load_settings, validate, ConfigResolver, Configuration, Settings};
use crate::environment::ResolvedEnvironment;
use crate::error::Result;
use crate::mode::ResolvedMode;
use crate::ui::{should_use_colors, Theme, UserInterface};

/// Selector inputs gathered from flags and the process environment.
#[derive(Debug, Clone, Default)]
pub struct BuildContext {
    project_root: PathBuf,
    env_flag: Option<String>,
    env_var: Option<String>,
    mode_flag: Option<String>,
    strict: bool,
}

/// Outcome of resolving a [`BuildContext`].
#[derive(Debug, Clone)]
pub struct Resolved {
    pub environment: ResolvedEnvironment,
    pub mode: ResolvedMode,
    pub settings: Settings,
    pub config: Configuration,
}

impl BuildContext {
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            ..Default::default()
        }
    }

    pub fn with_env_flag(mut self, value: Option<String>) -> Self {
        self.env_flag = value;
        self
    }

    /// Value of `NODE_ENV` captured by the caller.
    pub fn with_env_var(mut self, value: Option<String>) -> Self {
        self.env_var = value;
        self
    }

    pub fn with_mode_flag(mut self, value: Option<String>) -> Self {
        self.mode_flag = value;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load settings and resolve both selectors into a configuration.
    ///
    /// Strict resolution applies when either `--strict` or the settings
    /// file asks for it. In verbose mode the selector sources are reported.
    ///
    /// # Errors
    ///
    /// Fails on unreadable or invalid settings, and on unknown selector
    /// values when strict.
    pub fn resolve(&self, ui: &mut dyn UserInterface) -> Result<Resolved> {
        let settings = load_settings(&self.project_root)?;
        validate(&settings)?;

        let strict = self.strict || settings.strict;
        debug!("Resolving selectors (strict: {})", strict);

        let environment = ResolvedEnvironment::resolve_with(
            self.env_flag.as_deref(),
            self.env_var.as_deref(),
            strict,
        )?;
        let mode = ResolvedMode::resolve_with(self.mode_flag.as_deref(), strict)?;

        let config = ConfigResolver::new()
            .with_root(&self.project_root)
            .with_settings(settings.clone())
            .resolve(environment.environment, mode.mode);

        let resolved = Resolved {
            environment,
            mode,
            settings,
            config,
        };
        if ui.output_mode().shows_details() {
            resolved.report(ui);
        }
        Ok(resolved)
    }
}

impl Resolved {
    /// Show where each selector value came from.
    pub fn report(&self, ui: &mut dyn UserInterface) {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };
        ui.message(&theme.format_field("Environment", &self.environment.to_string()));
        ui.message(&theme.format_field("Mode", &self.mode.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{Environment, EnvironmentSource};
    use crate::error::BundleConfigError;
    use crate::mode::BuildMode;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn resolves_without_settings() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let resolved = BuildContext::new(temp.path()).resolve(&mut ui).unwrap();

        assert_eq!(resolved.config.environment, Environment::Dev);
        assert_eq!(resolved.config.mode, BuildMode::Development);
        assert_eq!(resolved.config.output.path, temp.path().join("bundles/dev"));
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn env_var_used_when_no_flag() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let resolved = BuildContext::new(temp.path())
            .with_env_var(Some("stg".into()))
            .resolve(&mut ui)
            .unwrap();

        assert_eq!(resolved.environment.source, EnvironmentSource::EnvVar);
        assert_eq!(resolved.config.environment, Environment::Stg);
    }

    #[test]
    fn strict_flag_rejects_unknown_mode() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let err = BuildContext::new(temp.path())
            .with_mode_flag(Some("fast".into()))
            .with_strict(true)
            .resolve(&mut ui)
            .unwrap_err();

        assert!(matches!(err, BundleConfigError::UnknownMode { .. }));
    }

    #[test]
    fn strict_setting_rejects_unknown_environment() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("bundle-config.yml"), "strict: true\n").unwrap();
        let mut ui = MockUI::new();

        let err = BuildContext::new(temp.path())
            .with_env_flag(Some("qa".into()))
            .resolve(&mut ui)
            .unwrap_err();

        assert!(matches!(err, BundleConfigError::UnknownEnvironment { .. }));
    }

    #[test]
    fn lenient_falls_back() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let resolved = BuildContext::new(temp.path())
            .with_env_flag(Some("qa".into()))
            .with_mode_flag(Some("fast".into()))
            .resolve(&mut ui)
            .unwrap();

        assert_eq!(resolved.config.environment, Environment::Dev);
        assert_eq!(resolved.config.mode, BuildMode::Development);
        assert!(resolved.environment.fell_back());
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("bundle-config.yml"), "entry: ''\n").unwrap();
        let mut ui = MockUI::new();

        let err = BuildContext::new(temp.path()).resolve(&mut ui).unwrap_err();
        assert!(matches!(err, BundleConfigError::ConfigValidationError { .. }));
    }

    #[test]
    fn verbose_reports_sources() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        BuildContext::new(temp.path())
            .with_env_flag(Some("prod".into()))
            .resolve(&mut ui)
            .unwrap();

        assert!(ui
            .messages()
            .iter()
            .any(|m| m.contains("prod (from --env flag)")));
    }
}
