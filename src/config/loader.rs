//! Settings file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::merger::merge_layers;
use crate::config::schema::Settings;
use crate::error::{BundleConfigError, Result};

/// Project settings file name.
pub const SETTINGS_FILE: &str = "bundle-config.yml";
/// Uncommitted local overrides, laid over [`SETTINGS_FILE`].
pub const LOCAL_SETTINGS_FILE: &str = "bundle-config.local.yml";

/// Settings files found for a project, in merge order.
#[derive(Debug, Clone, Default)]
pub struct SettingsPaths {
    /// `bundle-config.yml`
    pub project: Option<PathBuf>,
    /// `bundle-config.local.yml`
    pub project_local: Option<PathBuf>,
}

impl SettingsPaths {
    /// Discover settings files in `project_root`.
    pub fn discover(project_root: &Path) -> Self {
        let existing = |name: &str| {
            let path = project_root.join(name);
            path.is_file().then_some(path)
        };

        Self {
            project: existing(SETTINGS_FILE),
            project_local: existing(LOCAL_SETTINGS_FILE),
        }
    }

    /// All existing files in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.project.is_none() && self.project_local.is_none()
    }
}

/// Find the project root by walking up from `start`.
///
/// Looks for a settings file first, then for `package.json`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(SETTINGS_FILE).is_file() || current.join("package.json").is_file() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Parse one settings document.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<Settings> {
    let value = parse_value(content, source_path)?;
    from_value(value, source_path)
}

/// Load and merge the settings files of a project.
///
/// Missing files are fine: with none present the defaults apply.
///
/// # Errors
///
/// Returns `ConfigParseError` naming the offending file if a document is
/// not valid YAML or the merged result does not fit the schema.
pub fn load_settings(project_root: &Path) -> Result<Settings> {
    let paths = SettingsPaths::discover(project_root);
    if paths.is_empty() {
        debug!("No settings files in {}, using defaults", project_root.display());
        return Ok(Settings::default());
    }

    let mut layers = Vec::new();
    for path in paths.all_existing() {
        debug!("Loading settings from {}", path.display());
        let content = fs::read_to_string(path)?;
        let value = parse_value(&content, path)?;
        // Check each layer alone so schema errors name the file that has them.
        from_value(value.clone(), path)?;
        layers.push(value);
    }

    from_value(merge_layers(&layers), &project_root.join(SETTINGS_FILE))
}

fn parse_value(content: &str, source_path: &Path) -> Result<serde_yaml::Value> {
    serde_yaml::from_str(content).map_err(|e| BundleConfigError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

fn from_value(value: serde_yaml::Value, source_path: &Path) -> Result<Settings> {
    if value.is_null() {
        return Ok(Settings::default());
    }

    serde_yaml::from_value(value).map_err(|e| BundleConfigError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
