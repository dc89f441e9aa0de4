//! Build mode resolution.
//!
//! The mode comes from the `--mode` flag, falling back to `development`
//! when the flag is absent, empty or not recognized.

use tracing::{debug, warn};

use super::naming::BuildMode;
use crate::error::{BundleConfigError, Result};

/// Where the mode selector value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSource {
    /// Explicitly set via `--mode` flag.
    Flag,
    /// Nothing was given; the default applies.
    Default,
}

impl std::fmt::Display for ModeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "--mode flag"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// A resolved build mode and how it was determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMode {
    pub mode: BuildMode,
    pub source: ModeSource,
    /// The flag value, when it was given but not recognized.
    pub unrecognized: Option<String>,
}

impl ResolvedMode {
    /// Resolve the mode, falling back to `development` for unknown values.
    ///
    /// # Example
    ///
    /// ```
    /// use bundle_config::mode::{BuildMode, ModeSource, ResolvedMode};
    ///
    /// let resolved = ResolvedMode::resolve(Some("production"));
    /// assert_eq!(resolved.mode, BuildMode::Production);
    /// assert_eq!(resolved.source, ModeSource::Flag);
    /// ```
    pub fn resolve(flag: Option<&str>) -> Self {
        let Some(value) = flag.filter(|v| !v.is_empty()) else {
            debug!("No build mode selected, using {}", BuildMode::default());
            return Self {
                mode: BuildMode::default(),
                source: ModeSource::Default,
                unrecognized: None,
            };
        };

        match value.parse::<BuildMode>() {
            Ok(mode) => {
                debug!("Build mode {} selected via --mode flag", mode);
                Self {
                    mode,
                    source: ModeSource::Flag,
                    unrecognized: None,
                }
            }
            Err(_) => {
                warn!(
                    "Unrecognized build mode '{}', falling back to {}",
                    value,
                    BuildMode::default()
                );
                Self {
                    mode: BuildMode::default(),
                    source: ModeSource::Flag,
                    unrecognized: Some(value.to_string()),
                }
            }
        }
    }

    /// Resolve the mode, rejecting values that are not recognized.
    ///
    /// # Errors
    ///
    /// Returns `UnknownMode` for a non-empty value that names no known mode.
    pub fn resolve_strict(flag: Option<&str>) -> Result<Self> {
        let resolved = Self::resolve(flag);
        match resolved.unrecognized {
            Some(value) => Err(BundleConfigError::UnknownMode { value }),
            None => Ok(resolved),
        }
    }

    /// Resolve leniently or strictly.
    pub fn resolve_with(flag: Option<&str>, strict: bool) -> Result<Self> {
        if strict {
            Self::resolve_strict(flag)
        } else {
            Ok(Self::resolve(flag))
        }
    }
}

impl std::fmt::Display for ResolvedMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.unrecognized {
            Some(value) => write!(
                f,
                "{} ('{}' from {} not recognized)",
                self.mode, value, self.source
            ),
            None => write!(f, "{} (from {})", self.mode, self.source),
        }
    }
}
