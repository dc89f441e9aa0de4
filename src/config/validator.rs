//! Settings validation.
//!
//! - `entry` must not be empty
//! - `bundles_dir` must be a relative path inside the project
//! - public path overrides must be absolute URLs or root-relative, ending in `/`

use std::path::Component;

use crate::config::schema::Settings;
use crate::error::{BundleConfigError, Result};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: &'static str,
    /// Human-readable error message
    pub message: String,
}

/// Validate settings and return all errors.
pub fn validate_settings(settings: &Settings) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if settings.entry.as_deref().is_some_and(|e| e.trim().is_empty()) {
        errors.push(ValidationError {
            rule: "empty-entry",
            message: "entry must not be empty".to_string(),
        });
    }

    if let Some(dir) = &settings.bundles_dir {
        let escapes = dir.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if dir.as_os_str().is_empty() || escapes {
            errors.push(ValidationError {
                rule: "bundles-dir",
                message: format!(
                    "bundles_dir '{}' must be a relative path inside the project",
                    dir.display()
                ),
            });
        }
    }

    for (environment, overrides) in &settings.environments {
        let Some(public_path) = &overrides.public_path else {
            continue;
        };

        let prefixed = ["http://", "https://", "/"]
            .iter()
            .any(|p| public_path.starts_with(p));
        if !prefixed || !public_path.ends_with('/') {
            errors.push(ValidationError {
                rule: "public-path",
                message: format!(
                    "public_path '{}' for {} must start with http://, https:// or / and end with /",
                    public_path, environment
                ),
            });
        }
    }

    errors
}

/// Validate settings, failing on the first report.
///
/// # Errors
///
/// Returns `ConfigValidationError` listing every problem found.
pub fn validate(settings: &Settings) -> Result<()> {
    let errors = validate_settings(settings);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(BundleConfigError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
