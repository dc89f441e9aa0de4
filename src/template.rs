//! Output filename templates.
//!
//! Templates use the bundler's bracketed placeholders, for example
//! `[chunkhash]/[name].js`. Hash placeholders accept an optional length
//! suffix (`[contenthash:8]`).
//!
//! # Example
//!
//! ```
//! use bundle_config::template::{FilenameTemplate, TemplateContext};
//!
//! let template = FilenameTemplate::new("[chunkhash]/[name].js");
//! assert!(template.has_hash());
//!
//! let ctx = TemplateContext::new("main").with_content(b"console.log(1)");
//! let rendered = template.render(&ctx);
//! assert!(rendered.ends_with("/main.js"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Number of hex characters a hash placeholder renders to by default.
pub const DEFAULT_HASH_LENGTH: usize = 20;

/// A placeholder recognized inside a filename template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `[name]`: the entry or chunk name.
    Name,
    /// `[id]`: the chunk id.
    Id,
    /// `[chunkhash]`: hash of the chunk's content.
    ChunkHash { len: Option<usize> },
    /// `[contenthash]`: hash of the emitted file's content.
    ContentHash { len: Option<usize> },
    /// `[hash]`: compilation hash.
    Hash { len: Option<usize> },
    /// `[path]`: source directory of an asset, with trailing slash.
    Path,
    /// `[ext]`: source extension of an asset.
    Ext,
}

impl Placeholder {
    fn parse(token: &str) -> Option<Self> {
        let (name, len) = match token.split_once(':') {
            Some((name, len)) => (name, Some(len.parse::<usize>().ok()?)),
            None => (token, None),
        };

        match (name, len) {
            ("name", None) => Some(Self::Name),
            ("id", None) => Some(Self::Id),
            ("path", None) => Some(Self::Path),
            ("ext", None) => Some(Self::Ext),
            ("chunkhash", len) => Some(Self::ChunkHash { len }),
            ("contenthash", len) => Some(Self::ContentHash { len }),
            ("hash", len) => Some(Self::Hash { len }),
            _ => None,
        }
    }

    /// Whether this placeholder expands to a content-derived hash.
    pub fn is_hash(&self) -> bool {
        matches!(
            self,
            Self::ChunkHash { .. } | Self::ContentHash { .. } | Self::Hash { .. }
        )
    }
}

/// A filename template such as `[path][name].[contenthash].[ext]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilenameTemplate(String);

impl FilenameTemplate {
    /// Wrap a template string.
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// The raw template string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prefix the template with a directory, e.g. `fonts/`.
    pub fn in_directory(&self, directory: &str) -> Self {
        Self(format!("{}/{}", directory.trim_end_matches('/'), self.0))
    }

    /// Placeholders in order of appearance. Unknown tokens are skipped.
    pub fn placeholders(&self) -> Vec<Placeholder> {
        segments(&self.0)
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(p, _) => Some(p),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Whether the template embeds a content hash.
    pub fn has_hash(&self) -> bool {
        self.placeholders().iter().any(Placeholder::is_hash)
    }

    /// Substitute placeholders with values from `ctx`.
    ///
    /// `[id]` falls back to the name and `[path]`/`[ext]` to empty strings.
    /// Hash placeholders stay unexpanded when the context carries no hash,
    /// as do bracketed tokens that are not placeholders.
    pub fn render(&self, ctx: &TemplateContext) -> String {
        let mut out = String::with_capacity(self.0.len() + DEFAULT_HASH_LENGTH);

        for segment in segments(&self.0) {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(p, raw) => match p {
                    Placeholder::Name => out.push_str(&ctx.name),
                    Placeholder::Id => out.push_str(ctx.id.as_deref().unwrap_or(&ctx.name)),
                    Placeholder::Path => out.push_str(&ctx.path),
                    Placeholder::Ext => out.push_str(&ctx.ext),
                    Placeholder::ChunkHash { len }
                    | Placeholder::ContentHash { len }
                    | Placeholder::Hash { len } => match &ctx.hash {
                        Some(hash) => {
                            let len = len.unwrap_or(DEFAULT_HASH_LENGTH).min(hash.len());
                            out.push_str(&hash[..len]);
                        }
                        None => out.push_str(raw),
                    },
                },
            }
        }

        out
    }
}

impl fmt::Display for FilenameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FilenameTemplate {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Values substituted into a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateContext {
    pub name: String,
    pub id: Option<String>,
    pub path: String,
    pub ext: String,
    /// Full hex digest; hash placeholders take a prefix of it.
    pub hash: Option<String>,
}

impl TemplateContext {
    /// Context for an entry or chunk name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_ext(mut self, ext: impl Into<String>) -> Self {
        self.ext = ext.into();
        self
    }

    /// Derive the hash from file content.
    pub fn with_content(mut self, content: &[u8]) -> Self {
        self.hash = Some(content_hash(content));
        self
    }
}

/// Hex-encoded SHA-256 of `content`.
pub fn content_hash(content: &[u8]) -> String {
    hex::encode(Sha256::digest(content))
}

enum Segment<'a> {
    Literal(&'a str),
    Placeholder(Placeholder, &'a str),
}

fn segments(template: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find('[') {
        let Some(end) = rest[start..].find(']').map(|i| start + i) else {
            break;
        };

        let raw = &rest[start..=end];
        match Placeholder::parse(&rest[start + 1..end]) {
            Some(p) => {
                if start > 0 {
                    out.push(Segment::Literal(&rest[..start]));
                }
                out.push(Segment::Placeholder(p, raw));
                rest = &rest[end + 1..];
            }
            // Not a placeholder: keep the '[' and rescan just past it, so a
            // placeholder nested inside the token still gets substituted.
            None => {
                out.push(Segment::Literal(&rest[..=start]));
                rest = &rest[start + 1..];
            }
        }
    }

    if !rest.is_empty() {
        out.push(Segment::Literal(rest));
    }

    out
}
