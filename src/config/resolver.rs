//! Configuration resolution.
//!
//! Resolution is a pure function of the environment, the build mode and
//! the project settings. Nothing here touches the filesystem or the
//! process environment.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::configuration::{Configuration, ModuleSpec, OutputSpec, StyleExtraction, DEVTOOL};
use super::schema::Settings;
use crate::environment::{Environment, ResolvedEnvironment};
use crate::manifest::ManifestDirective;
use crate::mode::{BuildMode, ResolvedMode};
use crate::rules::asset_rules;

/// Resolve a configuration from raw selector values with default settings.
///
/// Absent, empty or unrecognized values fall back to `dev` and
/// `development`; this never fails.
///
/// # Example
///
/// ```
/// use bundle_config::config::resolve;
///
/// let config = resolve(Some("prod"), Some("production"));
/// assert_eq!(config.output.path, std::path::PathBuf::from("bundles/prod"));
/// assert!(config.output.filename.has_hash());
/// assert_eq!(config.manifest.filename, "webpack-bundle.prod.json");
/// ```
pub fn resolve(environment: Option<&str>, mode: Option<&str>) -> Configuration {
    let environment = ResolvedEnvironment::resolve(environment, None).environment;
    let mode = ResolvedMode::resolve(mode).mode;
    ConfigResolver::default().resolve(environment, mode)
}

/// Resolves configurations for a project.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    root: PathBuf,
    settings: Settings,
}

impl ConfigResolver {
    /// Resolver with default settings and relative output paths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve output and manifest directories against `root`.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Build the configuration for `environment` and `mode`.
    pub fn resolve(&self, environment: Environment, mode: BuildMode) -> Configuration {
        let public_path = self.settings.public_path(environment).to_string();
        let output_path = self.root.join(self.settings.output_directory(environment));
        let naming = mode.naming();

        debug!(
            "Resolving {} / {}: output {} served from {}",
            environment,
            mode,
            output_path.display(),
            public_path
        );

        let output = OutputSpec {
            path: output_path,
            filename: naming.script,
            chunk_filename: naming.script_chunk,
            public_path: public_path.clone(),
        };

        let style_extraction = StyleExtraction {
            filename: naming.style,
            chunk_filename: naming.style_chunk,
        };

        let manifest = ManifestDirective::for_environment(
            environment,
            self.root.join(self.settings.bundles_dir()),
            public_path,
        );

        Configuration {
            mode,
            environment,
            entry: self.settings.entry().to_string(),
            output,
            module: ModuleSpec {
                rules: asset_rules(&naming.asset),
            },
            asset_filename: naming.asset,
            manifest,
            style_extraction,
            devtool: DEVTOOL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::configuration::Finalizer;
    use crate::config::schema::EnvironmentOverride;
    use crate::rules::RuleKind;

    #[test]
    fn prod_production_scenario() {
        let config = resolve(Some("prod"), Some("production"));
        assert_eq!(config.output.path, PathBuf::from("bundles/prod"));
        assert_eq!(
            config.output.public_path,
            "https://example.com/static/bundles/prod/"
        );
        assert!(config.output.filename.as_str().contains("[chunkhash]"));
        assert_eq!(config.manifest.filename, "webpack-bundle.prod.json");
    }

    #[test]
    fn defaults_scenario() {
        let config = resolve(None, None);
        assert_eq!(config.output.path, PathBuf::from("bundles/dev"));
        assert_eq!(
            config.output.public_path,
            "http://127.0.0.1:8000/static/bundles/dev/"
        );
        assert!(!config.output.filename.has_hash());
        assert_eq!(config.manifest.filename, "webpack-bundle.dev.json");
    }

    #[test]
    fn stg_production_scenario() {
        let config = resolve(Some("stg"), Some("production"));
        assert_eq!(config.output.path, PathBuf::from("bundles/stg"));
        assert_eq!(
            config.output.public_path,
            "https://staging.example.com/static/bundles/stg/"
        );
        assert_eq!(config.manifest.filename, "webpack-bundle.stg.json");
    }

    #[test]
    fn manifest_lives_in_bundles_dir() {
        let config = resolve(Some("stg"), None);
        assert_eq!(
            config.manifest.path(),
            PathBuf::from("bundles/webpack-bundle.stg.json")
        );
        assert_eq!(config.manifest.public_path, config.output.public_path);
    }

    #[test]
    fn style_extraction_follows_mode() {
        let prod = resolve(None, Some("production"));
        assert_eq!(
            prod.style_extraction.filename.as_str(),
            "[chunkhash]/[name].css"
        );
        let dev = resolve(None, Some("development"));
        assert_eq!(dev.style_extraction.filename.as_str(), "[name].css");
        assert_eq!(dev.style_extraction.chunk_filename.as_str(), "[name].[id].css");
    }

    #[test]
    fn carries_entry_devtool_and_mode() {
        let config = resolve(Some("prod"), Some("production"));
        assert_eq!(config.entry, "./index.js");
        assert_eq!(config.devtool, "source-map");
        assert_eq!(config.mode, BuildMode::Production);
        assert_eq!(config.environment, Environment::Prod);
    }

    #[test]
    fn finalizers_emit_manifest_then_extract_styles() {
        let config = resolve(None, None);
        let [first, second] = config.finalizers();
        assert!(matches!(first, Finalizer::EmitManifest(m) if m.filename == "webpack-bundle.dev.json"));
        assert!(matches!(second, Finalizer::ExtractStyles(_)));
    }

    #[test]
    fn resource_rules_use_asset_template() {
        let config = resolve(None, Some("production"));
        for kind in [RuleKind::Font, RuleKind::Image] {
            let resource = config.rules().get(kind).and_then(|r| r.resource()).unwrap();
            assert_eq!(resource.template, config.asset_filename);
        }
    }

    #[test]
    fn root_prefixes_output_and_manifest() {
        let config = ConfigResolver::new()
            .with_root("/srv/app/assets")
            .resolve(Environment::Prod, BuildMode::Production);
        assert_eq!(
            config.output.path,
            PathBuf::from("/srv/app/assets/bundles/prod")
        );
        assert_eq!(
            config.manifest.directory,
            PathBuf::from("/srv/app/assets/bundles")
        );
    }

    #[test]
    fn settings_override_public_path_and_entry() {
        let mut settings = Settings {
            entry: Some("./src/main.js".into()),
            bundles_dir: Some(PathBuf::from("public")),
            ..Default::default()
        };
        settings.environments.insert(
            Environment::Prod,
            EnvironmentOverride {
                public_path: Some("https://cdn.example.com/".into()),
            },
        );

        let config = ConfigResolver::new()
            .with_settings(settings)
            .resolve(Environment::Prod, BuildMode::Development);

        assert_eq!(config.entry, "./src/main.js");
        assert_eq!(config.output.path, PathBuf::from("public/prod"));
        assert_eq!(config.output.public_path, "https://cdn.example.com/");
        assert_eq!(config.manifest.public_path, "https://cdn.example.com/");
        assert_eq!(config.manifest.directory, PathBuf::from("public"));
    }

    #[test]
    fn entry_outputs_render_templates() {
        let dev = resolve(None, None).entry_outputs("main", b"x");
        assert_eq!(dev.script, "main.js");
        assert_eq!(dev.style, "main.css");

        let prod = resolve(None, Some("production")).entry_outputs("main", b"x");
        assert!(prod.script.ends_with("/main.js"));
        assert!(!prod.script.contains('['));
        assert_eq!(
            prod.script.trim_end_matches("/main.js"),
            prod.style.trim_end_matches("/main.css")
        );
    }

    #[test]
    fn manifest_record_uses_output_and_public_path() {
        let config = resolve(Some("prod"), None);
        let record = config
            .manifest_record(vec!["main=main.js".parse().unwrap()])
            .unwrap();
        assert_eq!(
            record.urls_for("main"),
            vec!["https://example.com/static/bundles/prod/main.js"]
        );
        assert_eq!(
            record.assets["main.js"].path,
            PathBuf::from("bundles/prod/main.js")
        );
    }

    #[test]
    fn serializes_bundler_shape() {
        let json = serde_json::to_value(resolve(Some("prod"), Some("production"))).unwrap();
        assert_eq!(json["mode"], "production");
        assert_eq!(json["output"]["publicPath"], "https://example.com/static/bundles/prod/");
        assert_eq!(json["output"]["chunkFilename"], "[chunkhash]/[name].[id].js");
        assert_eq!(json["module"]["rules"].as_array().map(Vec::len), Some(4));
        assert_eq!(json["manifest"]["filename"], "webpack-bundle.prod.json");
        assert_eq!(json["devtool"], "source-map");
    }
}
