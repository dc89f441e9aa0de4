//! Writing and reading manifest files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::directive::ManifestDirective;
use super::record::ManifestRecord;
use crate::error::{BundleConfigError, Result};

/// Writes manifest records where their directive says.
#[derive(Debug, Default, Clone, Copy)]
pub struct ManifestWriter;

impl ManifestWriter {
    pub fn new() -> Self {
        Self
    }

    /// Serialize `record` as pretty JSON.
    pub fn render(&self, record: &ManifestRecord) -> Result<String> {
        serde_json::to_string_pretty(record).map_err(|e| BundleConfigError::Other(e.into()))
    }

    /// Write `record` to the directive's path, creating the directory.
    ///
    /// An existing manifest for the same environment is replaced.
    pub fn write(&self, directive: &ManifestDirective, record: &ManifestRecord) -> Result<PathBuf> {
        let path = directive.path();
        let json = self.render(record)?;

        fs::create_dir_all(directive.directory())?;
        debug!("Writing {} bytes to {}", json.len(), path.display());
        fs::write(&path, json + "\n")?;

        debug!(
            "Wrote manifest with {} entries to {}",
            record.chunks.len(),
            path.display()
        );
        Ok(path)
    }

    /// Read a manifest back from disk.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read and `ConfigParseError` if it
    /// is not a manifest.
    pub fn read(&self, path: &Path) -> Result<ManifestRecord> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| BundleConfigError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
