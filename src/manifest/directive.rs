//! Manifest emission directive.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::environment::Environment;

/// Instructions for emitting the manifest of one build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestDirective {
    /// Directory the manifest is written into.
    #[serde(rename = "path")]
    pub directory: PathBuf,
    /// `webpack-bundle.<env>.json`
    pub filename: String,
    /// Public path recorded alongside the entries.
    pub public_path: String,
}

impl ManifestDirective {
    /// Directive for `environment`, writing into `directory`.
    pub fn for_environment(
        environment: Environment,
        directory: impl Into<PathBuf>,
        public_path: impl Into<String>,
    ) -> Self {
        Self {
            directory: directory.into(),
            filename: environment.manifest_filename(),
            public_path: public_path.into(),
        }
    }

    /// Full path of the manifest file.
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_follows_environment() {
        let directive = ManifestDirective::for_environment(
            Environment::Prod,
            "bundles",
            Environment::Prod.public_path(),
        );
        assert_eq!(directive.filename, "webpack-bundle.prod.json");
        assert_eq!(directive.path(), PathBuf::from("bundles/webpack-bundle.prod.json"));
    }

    #[test]
    fn serializes_like_tracker_options() {
        let directive = ManifestDirective::for_environment(Environment::Dev, "bundles", "/static/");
        let json = serde_json::to_value(&directive).unwrap();
        assert_eq!(json["path"], "bundles");
        assert_eq!(json["filename"], "webpack-bundle.dev.json");
        assert_eq!(json["publicPath"], "/static/");
    }
}
