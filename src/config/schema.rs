//! Settings file schema.
//!
//! Every field is optional; an absent settings file behaves exactly like
//! the built-in environment and mode tables.
//!
//! ```yaml
//! entry: ./index.js
//! bundles_dir: bundles
//! strict: false
//! environments:
//!   prod:
//!     public_path: https://cdn.example.com/static/bundles/prod/
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::environment::{Environment, BUNDLES_DIR};

/// Entry module used when the settings name none.
pub const DEFAULT_ENTRY: &str = "./index.js";

/// Project settings for configuration resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Entry module handed to the bundler.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,

    /// Directory (relative to the project root) holding bundles and manifests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundles_dir: Option<PathBuf>,

    /// Reject unrecognized environment and mode values instead of falling back.
    #[serde(default)]
    pub strict: bool,

    /// Per-environment overrides.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub environments: BTreeMap<Environment, EnvironmentOverride>,
}

/// Overrides for one environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentOverride {
    /// Replaces the built-in public path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,
}

impl Settings {
    /// The entry module.
    pub fn entry(&self) -> &str {
        self.entry.as_deref().unwrap_or(DEFAULT_ENTRY)
    }

    /// The bundles directory, relative to the project root.
    pub fn bundles_dir(&self) -> &Path {
        self.bundles_dir
            .as_deref()
            .unwrap_or_else(|| Path::new(BUNDLES_DIR))
    }

    /// Output directory for `environment`, relative to the project root.
    pub fn output_directory(&self, environment: Environment) -> PathBuf {
        self.bundles_dir().join(environment.as_str())
    }

    /// Public path for `environment`, honoring overrides.
    pub fn public_path(&self, environment: Environment) -> &str {
        self.environments
            .get(&environment)
            .and_then(|o| o.public_path.as_deref())
            .unwrap_or_else(|| environment.public_path())
    }
}
