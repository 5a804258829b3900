//! # flow-commit
//!
//! A structured Git commit message helper for workflow-based projects.
//!
//! A project declares its workflows by placing a `workflow.yaml` marker file
//! at the root of each workflow directory; the immediate subdirectories of a
//! workflow are its steps. `flow-commit` scans for those markers, persists a
//! mapping from directory names to display labels in `flow-commit.yaml`, and
//! on commit matches the changed files against that mapping to build a
//! message of the form:
//!
//! ```text
//! <type>[[workflow][step]]... <message>
//! ```
//!
//! which is then handed to `git commit`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod git;
pub mod utils;
pub mod workflow;

pub use crate::cli::Cli;

/// The current version of flow-commit.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
