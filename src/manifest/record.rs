//! Manifest contents.
//!
//! The layout follows webpack-bundle-tracker so existing server-side
//! loaders can read it:
//!
//! ```json
//! {
//!   "status": "done",
//!   "publicPath": "http://127.0.0.1:8000/static/bundles/dev/",
//!   "chunks": { "main": ["main.js", "main.css"] },
//!   "assets": {
//!     "main.js": {
//!       "name": "main.js",
//!       "path": "bundles/dev/main.js",
//!       "publicPath": "http://127.0.0.1:8000/static/bundles/dev/main.js"
//!     }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BundleConfigError, Result};

/// Build status recorded in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestStatus {
    Compile,
    Done,
    Error,
}

/// One emitted file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestAsset {
    /// File name relative to the output directory.
    pub name: String,
    /// Filesystem location the file was written to.
    pub path: PathBuf,
    /// URL the file is served from.
    pub public_path: String,
}

/// The whole manifest file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestRecord {
    pub status: ManifestStatus,
    pub public_path: String,
    /// Entry name to the files emitted for it, in emission order.
    /// Absent while a build is still compiling or after it failed.
    #[serde(default)]
    pub chunks: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub assets: BTreeMap<String, ManifestAsset>,
}

/// An entry and the files emitted for it, parsed from `name=file[,file...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSpec {
    pub name: String,
    pub files: Vec<String>,
}

impl FromStr for ChunkSpec {
    type Err = BundleConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let (name, files) = s.split_once('=').ok_or_else(|| BundleConfigError::InvalidChunk {
            chunk: s.to_string(),
            message: "expected NAME=FILE[,FILE...]".to_string(),
        })?;

        Ok(Self {
            name: name.trim().to_string(),
            files: files
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(String::from)
                .collect(),
        })
    }
}

impl ManifestRecord {
    /// A finished manifest with no entries.
    pub fn empty(public_path: impl Into<String>) -> Self {
        Self {
            status: ManifestStatus::Done,
            public_path: public_path.into(),
            chunks: BTreeMap::new(),
            assets: BTreeMap::new(),
        }
    }

    /// Build a manifest from entries and the files emitted for them.
    ///
    /// File names are relative to `output_directory`. Repeated chunk names
    /// append their files to the same entry.
    ///
    /// # Errors
    ///
    /// Returns `InvalidChunk` for an empty entry name, an entry without
    /// files, or a file name that is absolute or escapes the output
    /// directory.
    pub fn from_chunks<I>(output_directory: &Path, public_path: &str, chunks: I) -> Result<Self>
    where
        I: IntoIterator<Item = ChunkSpec>,
    {
        let mut record = Self::empty(public_path);

        for chunk in chunks {
            if chunk.name.is_empty() {
                return Err(BundleConfigError::InvalidChunk {
                    chunk: chunk.files.join(","),
                    message: "entry name is empty".to_string(),
                });
            }
            if chunk.files.is_empty() {
                return Err(BundleConfigError::InvalidChunk {
                    chunk: chunk.name,
                    message: "no files listed".to_string(),
                });
            }

            for file in &chunk.files {
                let name = normalize_file(&chunk.name, file)?;
                record.assets.insert(
                    name.clone(),
                    ManifestAsset {
                        name: name.clone(),
                        path: output_directory.join(&name),
                        public_path: format!("{}{}", public_path, name),
                    },
                );
                let files = record.chunks.entry(chunk.name.clone()).or_default();
                if !files.contains(&name) {
                    files.push(name);
                }
            }
        }

        Ok(record)
    }

    /// Public URLs of the files emitted for `entry`.
    pub fn urls_for(&self, entry: &str) -> Vec<&str> {
        self.chunks
            .get(entry)
            .into_iter()
            .flatten()
            .filter_map(|file| self.assets.get(file))
            .map(|asset| asset.public_path.as_str())
            .collect()
    }
}

fn normalize_file(chunk: &str, file: &str) -> Result<String> {
    let unified = file.replace('\\', "/");
    let trimmed = unified.trim_start_matches("./");
    let path = Path::new(trimmed);

    let escapes = path.components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes || trimmed.is_empty() {
        return Err(BundleConfigError::InvalidChunk {
            chunk: chunk.to_string(),
            message: format!("'{}' is not inside the output directory", file),
        });
    }

    Ok(trimmed.to_string())
}
