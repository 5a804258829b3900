//! Directory walk that detects workflows and their steps.
//!
//! The walk is pure discovery: it reads the filesystem and reports what it
//! found. Labelling and merging against an existing config happen separately
//! in [`crate::workflow::merge`], so no prompting occurs here.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// Marker file that declares its containing directory to be a workflow.
pub const MARKER_FILE_NAME: &str = "workflow.yaml";

/// Everything one scan of the project tree detected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectScan {
    /// Detected workflows, in walk order.
    pub workflows: Vec<DetectedWorkflow>,
}

/// A directory carrying the workflow marker file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedWorkflow {
    /// Base name of the workflow directory; the mapping key.
    pub name: String,
    /// Path of the workflow directory, relative to the scan root.
    pub dir: PathBuf,
    /// Immediate subdirectories of the workflow directory.
    pub steps: Vec<DetectedStep>,
}

/// An immediate subdirectory of a workflow directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedStep {
    /// Base name of the step directory.
    pub name: String,
    /// Path of the step directory, relative to the scan root.
    pub path: PathBuf,
}

impl DetectedWorkflow {
    /// Composite `workflow/step` mapping key for one of this workflow's steps.
    pub fn step_key(&self, step: &DetectedStep) -> String {
        format!("{}/{}", self.name, step.name)
    }
}

/// Walks the tree under `root` and reports every directory that carries the
/// [`MARKER_FILE_NAME`] marker, together with its immediate subdirectories.
///
/// Any I/O error aborts the whole scan; a partial result is never returned.
pub fn scan<P: AsRef<Path>>(root: P) -> Result<ProjectScan> {
    let root = root.as_ref();
    let mut result = ProjectScan::default();

    walk(root, root, &mut result)?;

    debug!(workflows = result.workflows.len(), "project scan complete");

    Ok(result)
}

fn walk(root: &Path, dir: &Path, result: &mut ProjectScan) -> Result<()> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut subdirs = Vec::new();
    let mut has_marker = false;

    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to stat {}", entry.path().display()))?;

        if file_type.is_dir() {
            subdirs.push(entry.path());
        } else if entry.file_name() == MARKER_FILE_NAME {
            has_marker = true;
        }
    }

    // Stable walk order regardless of readdir order
    subdirs.sort();

    if has_marker {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let rel_dir = dir.strip_prefix(root).unwrap_or(dir).to_path_buf();

        debug!(workflow = %name, dir = %rel_dir.display(), "detected workflow");

        let steps = subdirs
            .iter()
            .map(|sub| DetectedStep {
                name: sub
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                path: sub.strip_prefix(root).unwrap_or(sub).to_path_buf(),
            })
            .collect();

        result.workflows.push(DetectedWorkflow {
            name,
            dir: rel_dir,
            steps,
        });
    }

    for sub in &subdirs {
        walk(root, sub, result)?;
    }

    Ok(())
}
