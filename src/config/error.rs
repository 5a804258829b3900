//! Config-specific error handling.

use thiserror::Error;

/// Errors raised while loading or persisting the project config.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The project has no config file yet.
    #[error("This is not an initialized flow-commit project. Run 'flow-commit init' first")]
    NotInitialized,

    /// The config file could not be read or written.
    #[error("Failed to access config file {path}: {source}")]
    Io {
        /// Path to the config file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML for the expected document shape.
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        /// Path to the config file.
        path: String,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },
}

// Note: anyhow already has a blanket impl for thiserror::Error types
