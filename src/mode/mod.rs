//! Build modes and their naming schemes.
//!
//! The mode decides how output files are named. `production` embeds content
//! hashes for cache busting; `development` keeps names stable between
//! rebuilds. The active mode comes from the `--mode` flag and falls back to
//! `development`.

pub mod naming;
pub mod resolver;

pub use naming::{BuildMode, NamingScheme};
pub use resolver::{ModeSource, ResolvedMode};
