//! Git operations: working tree status, staging, and commit invocation.

pub mod repository;

pub use repository::{ChangedFiles, GitRepository};
