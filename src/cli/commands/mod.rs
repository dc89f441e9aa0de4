//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Commands that need a resolved
//! configuration share one [`BuildContext`], so global selector flags
//! behave the same for every subcommand.

pub mod completions;
pub mod context;
pub mod dispatcher;
pub mod manifest;
pub mod preview;
pub mod resolve;
pub mod rules;

pub use context::{BuildContext, Resolved};
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
