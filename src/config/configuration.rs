//! The resolved configuration handed to the bundler.

use std::path::Path;

use serde::Serialize;

use crate::environment::Environment;
use crate::error::Result;
use crate::manifest::{ChunkSpec, ManifestDirective, ManifestRecord};
use crate::mode::BuildMode;
use crate::rules::{AssetRule, RuleSet};
use crate::template::{FilenameTemplate, TemplateContext};

/// Source map style requested for all transformed output.
pub const DEVTOOL: &str = "source-map";

/// Where and how entry scripts are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSpec {
    /// Output directory.
    pub path: std::path::PathBuf,
    pub filename: FilenameTemplate,
    pub chunk_filename: FilenameTemplate,
    pub public_path: String,
}

/// Stylesheet extraction into separate files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleExtraction {
    pub filename: FilenameTemplate,
    pub chunk_filename: FilenameTemplate,
}

/// The module block: the asset rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleSpec {
    pub rules: RuleSet,
}

/// A directive the bundler runs once the build finishes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Finalizer<'a> {
    EmitManifest(&'a ManifestDirective),
    ExtractStyles(&'a StyleExtraction),
}

/// Filenames an entry will be emitted under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryOutputs {
    pub script: String,
    pub style: String,
}

/// Complete build configuration for one environment/mode pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub mode: BuildMode,
    pub environment: Environment,
    pub entry: String,
    pub output: OutputSpec,
    pub module: ModuleSpec,
    /// Generic template for fonts and images, before the subfolder.
    pub asset_filename: FilenameTemplate,
    pub manifest: ManifestDirective,
    pub style_extraction: StyleExtraction,
    pub devtool: String,
}

impl Configuration {
    pub fn output_directory(&self) -> &Path {
        &self.output.path
    }

    pub fn public_path(&self) -> &str {
        &self.output.public_path
    }

    pub fn rules(&self) -> &RuleSet {
        &self.module.rules
    }

    /// The rule that applies to `path`, if any.
    pub fn rule_for(&self, path: &str) -> Option<&AssetRule> {
        self.module.rules.first_match(path)
    }

    /// Post-build directives in the order the bundler runs them.
    pub fn finalizers(&self) -> [Finalizer<'_>; 2] {
        [
            Finalizer::EmitManifest(&self.manifest),
            Finalizer::ExtractStyles(&self.style_extraction),
        ]
    }

    /// Filenames an entry's script and extracted stylesheet get, hashing
    /// `content` where the templates ask for it.
    pub fn entry_outputs(&self, name: &str, content: &[u8]) -> EntryOutputs {
        let ctx = TemplateContext::new(name).with_content(content);
        EntryOutputs {
            script: self.output.filename.render(&ctx),
            style: self.style_extraction.filename.render(&ctx),
        }
    }

    /// Build the manifest for files emitted under this configuration.
    pub fn manifest_record<I>(&self, chunks: I) -> Result<ManifestRecord>
    where
        I: IntoIterator<Item = ChunkSpec>,
    {
        ManifestRecord::from_chunks(&self.output.path, &self.manifest.public_path, chunks)
    }
}
