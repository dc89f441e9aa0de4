//! Asset rules: which files are transformed, and how.
//!
//! A rule pairs a [`FileMatcher`] with a [`RuleAction`]. Rules are kept in
//! a [`RuleSet`] and evaluated in order; the first rule whose matcher
//! accepts a file applies to it.
//!
//! - [`matcher`] - File matchers backed by regular expressions
//! - [`loader`] - Loader steps that make up a transform chain
//! - [`table`] - The four built-in rules and first-match evaluation

pub mod loader;
pub mod matcher;
pub mod table;

pub use loader::{LoaderOptions, LoaderStep};
pub use matcher::FileMatcher;
pub use table::{asset_rules, AssetRule, ResourceOutput, RuleAction, RuleKind, RuleSet};
