//! Build configuration: project settings and the resolver.
//!
//! This module handles:
//! - The resolved [`Configuration`] in [`configuration`]
//! - Resolution from environment and mode in [`resolver`]
//! - The settings file schema in [`schema`]
//! - Settings discovery and loading in [`loader`]
//! - Layering of settings files in [`merger`]
//! - Settings validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use bundle_config::config::{load_settings, validate, ConfigResolver};
//! use bundle_config::environment::Environment;
//! use bundle_config::mode::BuildMode;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("bundle-config.yml"), "entry: ./src/main.js").unwrap();
//!
//! let settings = load_settings(temp.path()).unwrap();
//! validate(&settings).unwrap();
//!
//! let config = ConfigResolver::new()
//!     .with_root(temp.path())
//!     .with_settings(settings)
//!     .resolve(Environment::Stg, BuildMode::Production);
//! assert_eq!(config.entry, "./src/main.js");
//! assert!(config.output.path.ends_with("bundles/stg"));
//! ```
//!
//! # Settings File Locations
//!
//! Settings are merged in this order:
//! 1. Project settings (`bundle-config.yml`)
//! 2. Local overrides (`bundle-config.local.yml`)

pub mod configuration;
pub mod loader;
pub mod merger;
pub mod resolver;
pub mod schema;
pub mod validator;

pub use configuration::{
    Configuration, EntryOutputs, Finalizer, ModuleSpec, OutputSpec, StyleExtraction, DEVTOOL,
};
pub use loader::{
    find_project_root, load_settings, parse_settings, SettingsPaths, LOCAL_SETTINGS_FILE,
    SETTINGS_FILE,
};
pub use merger::{deep_merge, merge_layers};
pub use resolver::{resolve, ConfigResolver};
pub use schema::{EnvironmentOverride, Settings, DEFAULT_ENTRY};
pub use validator::{validate, validate_settings, ValidationError};
