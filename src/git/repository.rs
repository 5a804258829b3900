//! Git repository wrapper.
//!
//! Reading the working tree goes through `git2`; the mutating operations
//! (staging, committing) shell out to the `git` binary so hooks and user
//! configuration behave exactly as they would on the command line.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use git2::{Repository, Status, StatusOptions};
use tracing::debug;

/// Git repository wrapper.
pub struct GitRepository {
    repo: Repository,
}

/// Changed files in the working tree, split by staging state.
///
/// A file can appear in both lists (e.g. staged, then modified again).
#[derive(Debug, Clone, Default)]
pub struct ChangedFiles {
    /// Paths with index-side changes, relative to the repository root.
    pub staged: Vec<String>,
    /// Paths with worktree-side changes (including untracked files).
    pub unstaged: Vec<String>,
}

impl ChangedFiles {
    /// Whether the working tree has no changes at all.
    pub fn is_empty(&self) -> bool {
        self.staged.is_empty() && self.unstaged.is_empty()
    }
}

const INDEX_CHANGED: Status = Status::INDEX_NEW
    .union(Status::INDEX_MODIFIED)
    .union(Status::INDEX_DELETED)
    .union(Status::INDEX_RENAMED)
    .union(Status::INDEX_TYPECHANGE);

const WORKTREE_CHANGED: Status = Status::WT_NEW
    .union(Status::WT_MODIFIED)
    .union(Status::WT_DELETED)
    .union(Status::WT_RENAMED)
    .union(Status::WT_TYPECHANGE);

impl GitRepository {
    /// Open repository at specified path.
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::open(path).context("Not in a git repository")?;

        Ok(Self { repo })
    }

    /// Working directory of the repository.
    ///
    /// Bare repositories have no working tree and cannot be committed to by
    /// this tool.
    pub fn workdir(&self) -> Result<PathBuf> {
        self.repo
            .workdir()
            .map(Path::to_path_buf)
            .context("Repository has no working directory")
    }

    /// Collects changed files in the working tree, split into staged and
    /// unstaged sets. Untracked files count as unstaged.
    pub fn changed_files(&self) -> Result<ChangedFiles> {
        let mut options = StatusOptions::new();
        options.include_untracked(true).recurse_untracked_dirs(true);

        let statuses = self
            .repo
            .statuses(Some(&mut options))
            .context("Failed to get repository status")?;

        let mut changes = ChangedFiles::default();

        for entry in statuses.iter() {
            let Some(path) = entry.path() else { continue };
            let flags = entry.status();

            if flags.intersects(INDEX_CHANGED) {
                changes.staged.push(path.to_string());
            }
            if flags.intersects(WORKTREE_CHANGED) {
                changes.unstaged.push(path.to_string());
            }
        }

        debug!(
            staged = changes.staged.len(),
            unstaged = changes.unstaged.len(),
            "collected working tree changes"
        );

        Ok(changes)
    }

    /// Stages every change in the working tree (`git add .`).
    pub fn stage_all(&self) -> Result<()> {
        let workdir = self.workdir()?;

        let output = Command::new("git")
            .args(["add", "."])
            .current_dir(&workdir)
            .output()
            .context("Failed to execute git add")?;

        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("Failed to stage changes: {}", error_msg);
        }

        Ok(())
    }

    /// Commits the staged changes with `message` (`git commit -m`).
    pub fn commit(&self, message: &str) -> Result<()> {
        let workdir = self.workdir()?;

        let output = Command::new("git")
            .args(["commit", "-m", message])
            .current_dir(&workdir)
            .output()
            .context("Failed to execute git commit")?;

        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("Commit failed: {}", error_msg);
        }

        Ok(())
    }
}
