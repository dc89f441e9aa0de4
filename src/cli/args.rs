//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::manifest::ChunkSpec;

/// bundle-config - Resolve asset bundle configuration per environment and build mode.
#[derive(Debug, Parser)]
#[command(name = "bundle-config")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Deployment environment: dev, stg or prod (falls back to NODE_ENV, then dev)
    #[arg(short, long, global = true, value_name = "ENV")]
    pub env: Option<String>,

    /// Build mode: development or production (default: development)
    #[arg(short, long, global = true, value_name = "MODE")]
    pub mode: Option<String>,

    /// Fail on unrecognized environment or mode instead of falling back
    #[arg(long, global = true)]
    pub strict: bool,

    /// Show where each selector value came from
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print command output and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the resolved configuration (default if no command specified)
    Resolve(ResolveArgs),

    /// List asset rules, or show which rule applies to each path
    Rules(RulesArgs),

    /// Show the filenames an entry will be emitted under
    Preview(PreviewArgs),

    /// Write the bundle manifest for emitted files
    Manifest(ManifestArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// Output as JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `rules` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RulesArgs {
    /// Source paths to match against the rules
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,
}

/// Arguments for the `preview` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PreviewArgs {
    /// Entry as NAME=FILE, relative to the project root (default: main=<configured entry>)
    #[arg(long = "entry", value_name = "NAME=FILE")]
    pub entries: Vec<ChunkSpec>,
}

/// Arguments for the `manifest` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ManifestArgs {
    /// Entry and its emitted files as NAME=FILE[,FILE...], relative to the output directory
    #[arg(long = "chunk", value_name = "NAME=FILE", required = true)]
    pub chunks: Vec<ChunkSpec>,

    /// Print the manifest instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
