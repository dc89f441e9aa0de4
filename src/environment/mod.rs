//! Deployment environments and their resolution.
//!
//! An environment decides where built assets are written and which URL
//! prefix they are served from. The active environment is resolved with
//! this priority chain:
//!
//! 1. Explicit `--env` flag
//! 2. `NODE_ENV` environment variable
//! 3. Fallback to `dev`
//!
//! Values that are not a known environment fall back to `dev` unless
//! strict resolution is requested.

pub mod resolver;
pub mod target;

pub use resolver::{EnvironmentSource, ResolvedEnvironment, ENV_VAR};
pub use target::{Environment, BUNDLES_DIR};
