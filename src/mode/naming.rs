//! The fixed build mode table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BundleConfigError;
use crate::template::FilenameTemplate;

/// A compilation profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Unhashed names, fast rebuilds.
    #[default]
    Development,
    /// Content-hashed names for long-term caching.
    Production,
}

impl BuildMode {
    /// Every mode, in table order.
    pub const ALL: [BuildMode; 2] = [BuildMode::Development, BuildMode::Production];

    /// The selector value naming this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    /// Filename templates used in this mode.
    pub fn naming(&self) -> NamingScheme {
        match self {
            Self::Production => NamingScheme {
                script: "[chunkhash]/[name].js".into(),
                script_chunk: "[chunkhash]/[name].[id].js".into(),
                style: "[chunkhash]/[name].css".into(),
                style_chunk: "[chunkhash]/[name].[id].css".into(),
                asset: "[path][name].[contenthash].[ext]".into(),
            },
            Self::Development => NamingScheme {
                script: "[name].js".into(),
                script_chunk: "[name].js".into(),
                style: "[name].css".into(),
                style_chunk: "[name].[id].css".into(),
                asset: "[path][name].[ext]".into(),
            },
        }
    }

    /// Whether output filenames carry a content hash.
    pub fn hashes_filenames(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Parse a selector value, falling back to [`BuildMode::Development`].
    pub fn parse_lenient(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for BuildMode {
    type Err = BundleConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            _ => Err(BundleConfigError::UnknownMode {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output filename templates for one build mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingScheme {
    /// Entry scripts.
    pub script: FilenameTemplate,
    /// Split-off script chunks.
    pub script_chunk: FilenameTemplate,
    /// Extracted entry stylesheets.
    pub style: FilenameTemplate,
    /// Extracted stylesheet chunks.
    pub style_chunk: FilenameTemplate,
    /// Fonts, images and other opaque resources (before the subfolder prefix).
    pub asset: FilenameTemplate,
}
