//! bundle-config - Environment- and mode-aware asset bundle configuration.
//!
//! Given a deployment environment (`dev`, `stg`, `prod`) and a build mode
//! (`development`, `production`), bundle-config resolves the complete
//! configuration a bundler needs: where output goes, which public URL it is
//! served from, how emitted files are named, which rules apply to which
//! source files, and where the bundle manifest is written.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings files and configuration resolution
//! - [`environment`] - Deployment targets and environment selection
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - Bundle manifest records and emission
//! - [`mode`] - Build modes and their filename templates
//! - [`rules`] - Asset rules and file matching
//! - [`template`] - Filename templates and content hashing
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use bundle_config::config::resolve;
//!
//! let config = resolve(Some("stg"), Some("production"));
//! assert_eq!(
//!     config.output.public_path,
//!     "https://staging.example.com/static/bundles/stg/"
//! );
//! assert_eq!(config.output.filename.as_str(), "[chunkhash]/[name].js");
//! assert_eq!(config.rules().len(), 4);
//! ```
//!
//! For settings-file based resolution, see [`config::ConfigResolver`].

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod manifest;
pub mod mode;
pub mod rules;
pub mod template;
pub mod ui;

pub use error::{BundleConfigError, Result};
