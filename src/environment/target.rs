//! The fixed environment table.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BundleConfigError;

/// Directory (relative to the project root) that holds every environment's
/// bundles and the manifest files.
pub const BUNDLES_DIR: &str = "bundles";

/// A deployment target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development server.
    #[default]
    Dev,
    /// Staging deployment.
    Stg,
    /// Production deployment.
    Prod,
}

impl Environment {
    /// Every environment, in table order.
    pub const ALL: [Environment; 3] = [Environment::Dev, Environment::Stg, Environment::Prod];

    /// The selector value naming this environment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Stg => "stg",
            Self::Prod => "prod",
        }
    }

    /// Base URL that asset references resolve against at runtime.
    pub fn public_path(&self) -> &'static str {
        match self {
            Self::Prod => "https://example.com/static/bundles/prod/",
            Self::Stg => "https://staging.example.com/static/bundles/stg/",
            Self::Dev => "http://127.0.0.1:8000/static/bundles/dev/",
        }
    }

    /// Output directory relative to the project root (`bundles/<env>`).
    pub fn output_directory(&self) -> PathBuf {
        PathBuf::from(BUNDLES_DIR).join(self.as_str())
    }

    /// Name of the manifest file written for this environment.
    pub fn manifest_filename(&self) -> String {
        format!("webpack-bundle.{}.json", self.as_str())
    }

    /// Parse a selector value, falling back to [`Environment::Dev`] for
    /// anything that is absent or not recognized.
    ///
    /// # Example
    ///
    /// ```
    /// use bundle_config::environment::Environment;
    ///
    /// assert_eq!(Environment::parse_lenient(Some("prod")), Environment::Prod);
    /// assert_eq!(Environment::parse_lenient(Some("production")), Environment::Dev);
    /// assert_eq!(Environment::parse_lenient(None), Environment::Dev);
    /// ```
    pub fn parse_lenient(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for Environment {
    type Err = BundleConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "stg" => Ok(Self::Stg),
            "prod" => Ok(Self::Prod),
            _ => Err(BundleConfigError::UnknownEnvironment {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
