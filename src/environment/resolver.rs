//! Environment resolution.
//!
//! Resolves the active environment using the priority chain:
//! 1. Explicit `--env` flag
//! 2. `NODE_ENV` environment variable
//! 3. Fallback to `dev`
//!
//! Empty values count as absent, so the chain continues past them.

use tracing::{debug, warn};

use super::target::Environment;
use crate::error::{BundleConfigError, Result};

/// Environment variable consulted when no `--env` flag is given.
pub const ENV_VAR: &str = "NODE_ENV";

/// Where the environment selector value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentSource {
    /// Explicitly set via `--env` flag.
    Flag,
    /// Read from the `NODE_ENV` environment variable.
    EnvVar,
    /// Nothing was given; the default applies.
    Default,
}

impl std::fmt::Display for EnvironmentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "--env flag"),
            Self::EnvVar => write!(f, "{}", ENV_VAR),
            Self::Default => write!(f, "default"),
        }
    }
}

/// A resolved environment and how it was determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEnvironment {
    /// The environment in effect.
    pub environment: Environment,
    /// Which input supplied the selector value.
    pub source: EnvironmentSource,
    /// The selector value, when it was given but not recognized.
    pub unrecognized: Option<String>,
}

impl ResolvedEnvironment {
    /// Resolve the environment, falling back to `dev` for unknown values.
    ///
    /// # Arguments
    ///
    /// * `flag` - Explicit `--env` flag value
    /// * `env_var` - Value of `NODE_ENV`, if set
    ///
    /// # Example
    ///
    /// ```
    /// use bundle_config::environment::{Environment, EnvironmentSource, ResolvedEnvironment};
    ///
    /// let resolved = ResolvedEnvironment::resolve(None, Some("stg"));
    /// assert_eq!(resolved.environment, Environment::Stg);
    /// assert_eq!(resolved.source, EnvironmentSource::EnvVar);
    ///
    /// let resolved = ResolvedEnvironment::resolve(Some("staging"), None);
    /// assert_eq!(resolved.environment, Environment::Dev);
    /// assert_eq!(resolved.unrecognized.as_deref(), Some("staging"));
    /// ```
    pub fn resolve(flag: Option<&str>, env_var: Option<&str>) -> Self {
        let Some((value, source)) = select(flag, env_var) else {
            debug!("No environment selected, using {}", Environment::default());
            return Self {
                environment: Environment::default(),
                source: EnvironmentSource::Default,
                unrecognized: None,
            };
        };

        match value.parse::<Environment>() {
            Ok(environment) => {
                debug!("Environment {} selected via {}", environment, source);
                Self {
                    environment,
                    source,
                    unrecognized: None,
                }
            }
            Err(_) => {
                warn!(
                    "Unrecognized environment '{}' from {}, falling back to {}",
                    value,
                    source,
                    Environment::default()
                );
                Self {
                    environment: Environment::default(),
                    source,
                    unrecognized: Some(value.to_string()),
                }
            }
        }
    }

    /// Resolve the environment, rejecting values that are not recognized.
    ///
    /// Absent and empty values still resolve to `dev`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownEnvironment` for a non-empty value that names no
    /// known environment.
    pub fn resolve_strict(flag: Option<&str>, env_var: Option<&str>) -> Result<Self> {
        let resolved = Self::resolve(flag, env_var);
        match resolved.unrecognized {
            Some(value) => Err(BundleConfigError::UnknownEnvironment { value }),
            None => Ok(resolved),
        }
    }

    /// Resolve leniently or strictly.
    pub fn resolve_with(flag: Option<&str>, env_var: Option<&str>, strict: bool) -> Result<Self> {
        if strict {
            Self::resolve_strict(flag, env_var)
        } else {
            Ok(Self::resolve(flag, env_var))
        }
    }

    /// Whether an unrecognized value was replaced by the default.
    pub fn fell_back(&self) -> bool {
        self.unrecognized.is_some()
    }
}

impl std::fmt::Display for ResolvedEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.unrecognized {
            Some(value) => write!(
                f,
                "{} ('{}' from {} not recognized)",
                self.environment, value, self.source
            ),
            None => write!(f, "{} (from {})", self.environment, self.source),
        }
    }
}

fn select<'a>(
    flag: Option<&'a str>,
    env_var: Option<&'a str>,
) -> Option<(&'a str, EnvironmentSource)> {
    flag.filter(|v| !v.is_empty())
        .map(|v| (v, EnvironmentSource::Flag))
        .or_else(|| {
            env_var
                .filter(|v| !v.is_empty())
                .map(|v| (v, EnvironmentSource::EnvVar))
        })
}
