//! Bundle manifest: the side-channel file that maps entry names to the
//! files a build emitted and the URLs they are served from.
//!
//! A server-side template renderer reads `bundles/webpack-bundle.<env>.json`
//! to turn an entry name into `<script>`/`<link>` tags.
//!
//! - [`directive`] - Where the manifest goes and which public path it records
//! - [`record`] - The manifest contents
//! - [`writer`] - Writing and reading manifest files

pub mod directive;
pub mod record;
pub mod writer;

pub use directive::ManifestDirective;
pub use record::{ChunkSpec, ManifestAsset, ManifestRecord, ManifestStatus};
pub use writer::ManifestWriter;
