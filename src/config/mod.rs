//! Project configuration: the persisted workflow/step mapping.
//!
//! The mapping lives in a flat YAML document (`flow-commit.yaml`) at the
//! project root with three fields: a schema version string, a mapping of
//! workflow directory names to display labels, and a mapping of
//! `workflow/step` composite keys to step labels.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod error;

pub use error::ConfigError;

/// File name of the persisted mapping at the project root.
pub const CONFIG_FILE_NAME: &str = "flow-commit.yaml";

/// Schema version written to new config files.
pub const SCHEMA_VERSION: &str = "flow-commit/2024-09-29";

/// The persisted workflow/step mapping.
///
/// Keys are directory base names (workflows) and `workflow/step` composites
/// (steps); values are the display labels used in commit message annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Schema version of the document.
    pub schema: String,
    /// Workflow directory name → display label.
    #[serde(default)]
    pub workflows: BTreeMap<String, String>,
    /// `workflow/step` composite key → display label.
    #[serde(default)]
    pub steps: BTreeMap<String, String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectConfig {
    /// Creates an empty config carrying the current schema version.
    pub fn new() -> Self {
        Self {
            schema: SCHEMA_VERSION.to_string(),
            workflows: BTreeMap::new(),
            steps: BTreeMap::new(),
        }
    }

    /// Path of the config file under `root`.
    pub fn path_in<P: AsRef<Path>>(root: P) -> PathBuf {
        root.as_ref().join(CONFIG_FILE_NAME)
    }

    /// Whether `root` holds an initialized project (i.e. the config file exists).
    pub fn is_initialized<P: AsRef<Path>>(root: P) -> bool {
        Self::path_in(root).is_file()
    }

    /// Loads the config file from `root`.
    ///
    /// A missing file is [`ConfigError::NotInitialized`]. A schema mismatch is
    /// NOT an error; callers surface it via [`ProjectConfig::unsupported_schema`].
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self, ConfigError> {
        let path = Self::path_in(root);
        if !path.is_file() {
            return Err(ConfigError::NotInitialized);
        }

        let data = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config: Self = serde_yaml::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        debug!(
            workflows = config.workflows.len(),
            steps = config.steps.len(),
            "loaded project config"
        );

        Ok(config)
    }

    /// Returns the stored schema string when it differs from [`SCHEMA_VERSION`].
    ///
    /// A mismatch is a warning-only condition; processing continues either way.
    pub fn unsupported_schema(&self) -> Option<&str> {
        if self.schema == SCHEMA_VERSION {
            None
        } else {
            Some(&self.schema)
        }
    }

    /// Persists the config file under `root` atomically.
    ///
    /// The document is written to a temporary file in the same directory and
    /// renamed over the target, so a failed write never leaves a truncated
    /// config behind.
    pub fn save<P: AsRef<Path>>(&self, root: P) -> Result<(), ConfigError> {
        let path = Self::path_in(&root);
        let io_err = |source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        };

        let data = serde_yaml::to_string(self).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        let mut tmp = tempfile::NamedTempFile::new_in(root.as_ref()).map_err(io_err)?;
        tmp.write_all(data.as_bytes()).map_err(io_err)?;
        tmp.persist(&path).map_err(|e| io_err(e.error))?;

        debug!(path = %path.display(), "saved project config");

        Ok(())
    }
}
